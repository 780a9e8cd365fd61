//! Localized resource bundle.
//!
//! One keyed table covering every user-facing string in the four supported
//! languages. Each key carries all four translations in a single [`Entry`],
//! so a missing translation is a compile error rather than a runtime gap.
//! Unrecognized language codes resolve to English.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Pt,
    Es,
    Fr,
}

impl Lang {
    /// All supported languages, in display order.
    pub const ALL: [Lang; 4] = [Lang::En, Lang::Pt, Lang::Es, Lang::Fr];

    /// Parse a language code. Defaults to English on anything unrecognized.
    pub fn parse(code: &str) -> Lang {
        match code.trim().to_lowercase().as_str() {
            "pt" => Lang::Pt,
            "es" => Lang::Es,
            "fr" => Lang::Fr,
            _ => Lang::En,
        }
    }

    /// Returns the two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
            Lang::Es => "es",
            Lang::Fr => "fr",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Every user-facing string the assistant can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    /// Session-opening greeting.
    Greeting,
    /// Input field placeholder.
    InputPlaceholder,
    /// Acknowledgement when navigating to reminders.
    OpeningReminders,
    /// Acknowledgement when navigating to the shop.
    OpeningShop,
    /// Acknowledgement for a parsed shopping query.
    ShoppingAck,
    /// Acknowledgement when navigating back to the dashboard.
    BackToDashboard,
    /// Acknowledgement when navigating to the profile.
    OpeningProfile,
    /// Why-complete-my-profile explanation.
    ProfileExplainer,
    /// Why-referrals explanation (Zola Credits).
    ReferralsExplainer,
    /// Contextual help on the reminders page.
    RemindersHelp,
    /// Contextual help on the profile page.
    ProfileHelp,
    /// Contextual help on the referrals page.
    ReferralsHelp,
    /// Contextual help on the shop page.
    ShopHelp,
    /// Generic nudge listing example queries.
    Fallback,
}

impl TextKey {
    /// All keys, for completeness checks.
    pub const ALL: [TextKey; 14] = [
        TextKey::Greeting,
        TextKey::InputPlaceholder,
        TextKey::OpeningReminders,
        TextKey::OpeningShop,
        TextKey::ShoppingAck,
        TextKey::BackToDashboard,
        TextKey::OpeningProfile,
        TextKey::ProfileExplainer,
        TextKey::ReferralsExplainer,
        TextKey::RemindersHelp,
        TextKey::ProfileHelp,
        TextKey::ReferralsHelp,
        TextKey::ShopHelp,
        TextKey::Fallback,
    ];
}

/// One string in all four languages.
struct Entry {
    en: &'static str,
    pt: &'static str,
    es: &'static str,
    fr: &'static str,
}

impl Entry {
    fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Pt => self.pt,
            Lang::Es => self.es,
            Lang::Fr => self.fr,
        }
    }
}

fn entry(key: TextKey) -> Entry {
    match key {
        TextKey::Greeting => Entry {
            en: "Hi! I can explain Zolarus and guide you through reminders. Ask me anything.",
            pt: "Olá! Posso explicar o Zolarus e orientar você com lembretes e compras. Pergunte-me qualquer coisa.",
            es: "¡Hola! Puedo explicar Zolarus y ayudarte con recordatorios y compras. Pregúntame lo que quieras.",
            fr: "Salut ! Je peux expliquer Zolarus et vous guider avec les rappels et les achats. Posez-moi vos questions.",
        },
        TextKey::InputPlaceholder => Entry {
            en: "Ask about reminders, shop, or referrals…",
            pt: "Pergunte sobre lembretes, loja ou indicações…",
            es: "Pregunta sobre recordatorios, tienda o referencias…",
            fr: "Demandez des rappels, la boutique ou les parrainages…",
        },
        TextKey::OpeningReminders => Entry {
            en: "Opening Reminders…",
            pt: "Abrindo Lembretes…",
            es: "Abriendo Recordatorios…",
            fr: "Ouverture des rappels…",
        },
        TextKey::OpeningShop => Entry {
            en: "Opening the Shop…",
            pt: "Abrindo a Loja…",
            es: "Abriendo la Tienda…",
            fr: "Ouverture de la boutique…",
        },
        TextKey::ShoppingAck => Entry {
            en: "Opening the Shop with your gift search…",
            pt: "Abrindo a Loja com sua busca de presentes…",
            es: "Abriendo la Tienda con tu búsqueda de regalos…",
            fr: "Ouverture de la boutique avec votre recherche de cadeaux…",
        },
        TextKey::BackToDashboard => Entry {
            en: "Back to your Dashboard…",
            pt: "Voltando ao Painel…",
            es: "Volviendo al Panel…",
            fr: "Retour au tableau de bord…",
        },
        TextKey::OpeningProfile => Entry {
            en: "Opening your Profile…",
            pt: "Abrindo seu Perfil…",
            es: "Abriendo tu Perfil…",
            fr: "Ouverture de votre profil…",
        },
        TextKey::ProfileExplainer => Entry {
            en: "Completing your profile adds your name and optional phone so reminders and greetings feel personal. It’s quick and helps Zolarus tailor messages for you.",
            pt: "Completar seu perfil adiciona seu nome e telefone opcional para que lembretes e mensagens fiquem mais pessoais. É rápido e ajuda o Zolarus a personalizar a experiência.",
            es: "Completar tu perfil agrega tu nombre y teléfono opcional para que los recordatorios sean más personales. Es rápido y ayuda a Zolarus a personalizar tu experiencia.",
            fr: "Compléter votre profil ajoute votre nom et téléphone optionnel afin que les rappels soient plus personnels. C’est rapide et aide Zolarus à personnaliser votre expérience.",
        },
        TextKey::ReferralsExplainer => Entry {
            en: "Referrals help you earn Zola Credits! Share your unique link under **Referrals** (purple circle on your dashboard). Soon every new signup you bring will count toward your credits.",
            pt: "As indicações ajudam você a ganhar Créditos Zola! Compartilhe o link em **Indicações** (o círculo roxo no painel). Em breve, cada novo usuário que você indicar começará a contar para seus créditos.",
            es: "¡Las referencias te ayudan a ganar Créditos Zola! Comparte tu enlace en **Referencias** (el círculo morado en el panel). Pronto cada nuevo usuario que traigas contará para tus créditos.",
            fr: "Les parrainages vous font gagner des Crédits Zola ! Partagez le lien sous **Parrainages** (le cercle violet sur le tableau). Bientôt, chaque nouvel inscrit comptera pour vos crédits.",
        },
        TextKey::RemindersHelp => Entry {
            en: "To create a reminder, fill in **Title** (like “Mom’s birthday”), choose a **date and time**, then click **Save reminder**. You’ll get an email at the right time. It’s great for birthdays, anniversaries, or other special occasions — and you can return here to find a budget-friendly gift from the shop.",
            pt: "Para criar um lembrete, preencha o **Título** (por exemplo, “Aniversário da mãe”), escolha a **data e hora** e clique em **Salvar lembrete**. Você receberá um e-mail no momento certo. É ideal para aniversários, ocasiões especiais ou datas importantes — e você pode voltar aqui para comprar um presente dentro do seu orçamento.",
            es: "Para crear un recordatorio, completa el **Título** (por ejemplo “Cumpleaños de mamá”), elige la **fecha y hora**, y haz clic en **Guardar recordatorio**. Recibirás un correo a tiempo. Perfecto para cumpleaños y ocasiones especiales, y puedes volver aquí para comprar un regalo ajustado a tu presupuesto.",
            fr: "Pour créer un rappel, remplissez le **Titre** (ex. “Anniversaire de maman”), choisissez la **date et l’heure**, puis cliquez sur **Enregistrer le rappel**. Vous recevrez un e-mail au bon moment. Idéal pour les anniversaires ou occasions spéciales, et vous pouvez revenir ici pour trouver un cadeau adapté à votre budget.",
        },
        TextKey::ProfileHelp => Entry {
            en: "This is your profile. Add your name and an optional phone number so reminders and greetings feel personal.",
            pt: "Este é o seu perfil. Adicione seu nome e um telefone opcional para que lembretes e mensagens fiquem mais pessoais.",
            es: "Este es tu perfil. Agrega tu nombre y un teléfono opcional para que los recordatorios sean más personales.",
            fr: "Voici votre profil. Ajoutez votre nom et un téléphone optionnel pour que les rappels soient plus personnels.",
        },
        TextKey::ReferralsHelp => Entry {
            en: "This is your referrals page. Share your unique link and every new signup you bring will count toward your Zola Credits.",
            pt: "Esta é a sua página de indicações. Compartilhe seu link único e cada novo usuário que você indicar contará para seus Créditos Zola.",
            es: "Esta es tu página de referencias. Comparte tu enlace único y cada nuevo usuario que traigas contará para tus Créditos Zola.",
            fr: "Voici votre page de parrainages. Partagez votre lien unique et chaque nouvel inscrit comptera pour vos Crédits Zola.",
        },
        TextKey::ShopHelp => Entry {
            en: "Here you can compare prices across stores for gifts and everyday items. Type who it’s for and your budget, and I’ll surface the best deals — especially useful if you’re subscribed to see price changes.",
            pt: "Aqui você pode comparar preços entre lojas para presentes e compras do dia a dia. Digite para quem é e o seu orçamento, e eu mostrarei as melhores opções — especialmente útil se você for assinante para acompanhar variações de preço.",
            es: "Aquí puedes comparar precios entre tiendas para regalos y compras cotidianas. Escribe para quién es y tu presupuesto, y te mostraré las mejores opciones — aún mejor si estás suscrito para seguir las variaciones de precios.",
            fr: "Ici, vous pouvez comparer les prix entre boutiques pour des cadeaux et achats quotidiens. Indiquez pour qui et votre budget, et je vous montrerai les meilleures offres — encore mieux si vous êtes abonné pour suivre les variations de prix.",
        },
        TextKey::Fallback => Entry {
            en: "I can guide you through reminders, your profile, or the shop. Try asking “how do I create a reminder?” or “referrals” to learn how to earn Zola Credits.",
            pt: "Posso orientar você sobre lembretes, perfil ou loja. Tente perguntar “como criar um lembrete?” ou “indicações” para saber como ganhar Créditos Zola.",
            es: "Puedo guiarte sobre recordatorios, perfil o tienda. Prueba “¿cómo crear un recordatorio?” o “referencias” para aprender cómo ganar Créditos Zola.",
            fr: "Je peux vous guider sur les rappels, le profil ou la boutique. Essayez “comment créer un rappel ?” ou “parrainages” pour apprendre à gagner des Crédits Zola.",
        },
    }
}

/// Look up a string for the given language, falling back to English only
/// through [`Lang::parse`] (every entry carries all four languages).
pub fn text(lang: Lang, key: TextKey) -> &'static str {
    entry(key).get(lang)
}

/// Quick-suggestion chips shown alongside the input field.
pub fn chips(lang: Lang) -> &'static [&'static str; 6] {
    match lang {
        Lang::En => &[
            "how do I create a reminder?",
            "why complete my profile?",
            "open reminders",
            "go to shop",
            "referrals",
            "back to dashboard",
        ],
        Lang::Pt => &[
            "como criar um lembrete?",
            "por que completar meu perfil?",
            "abrir lembretes",
            "ir à loja",
            "indicações",
            "voltar ao painel",
        ],
        Lang::Es => &[
            "¿cómo crear un recordatorio?",
            "¿por qué completar mi perfil?",
            "abrir recordatorios",
            "ir a la tienda",
            "referencias",
            "volver al panel",
        ],
        Lang::Fr => &[
            "comment créer un rappel ?",
            "pourquoi compléter mon profil ?",
            "ouvrir rappels",
            "aller à la boutique",
            "parrainages",
            "retour au tableau de bord",
        ],
    }
}
