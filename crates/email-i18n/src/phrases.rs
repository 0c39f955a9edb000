//! Built-in phrase tables

use crate::Locale;

/// Phrase keys every built-in table defines
pub const PHRASE_KEYS: [&str; 9] = [
    "greeting",
    "intro",
    "cta_confirm",
    "cta_view",
    "vehicle_ready",
    "questions",
    "thanks",
    "signature",
    "unsubscribe",
];

const EN: [(&str, &str); 9] = [
    ("greeting", "Hello"),
    ("intro", "Thank you for choosing us."),
    ("cta_confirm", "Confirm booking"),
    ("cta_view", "View details"),
    ("vehicle_ready", "Your vehicle is ready for pickup."),
    ("questions", "Questions? Just reply to this email."),
    ("thanks", "Thank you"),
    ("signature", "Best regards"),
    ("unsubscribe", "Unsubscribe"),
];

const DE: [(&str, &str); 9] = [
    ("greeting", "Hallo"),
    ("intro", "Vielen Dank, dass Sie sich für uns entschieden haben."),
    ("cta_confirm", "Buchung bestätigen"),
    ("cta_view", "Details ansehen"),
    ("vehicle_ready", "Ihr Fahrzeug ist abholbereit."),
    ("questions", "Fragen? Antworten Sie einfach auf diese E-Mail."),
    ("thanks", "Vielen Dank"),
    ("signature", "Mit freundlichen Grüßen"),
    ("unsubscribe", "Abmelden"),
];

const FR: [(&str, &str); 9] = [
    ("greeting", "Bonjour"),
    ("intro", "Merci de nous avoir choisis."),
    ("cta_confirm", "Confirmer la réservation"),
    ("cta_view", "Voir les détails"),
    ("vehicle_ready", "Votre véhicule est prêt à être récupéré."),
    ("questions", "Des questions ? Répondez simplement à cet e-mail."),
    ("thanks", "Merci"),
    ("signature", "Cordialement"),
    ("unsubscribe", "Se désabonner"),
];

const SV: [(&str, &str); 9] = [
    ("greeting", "Hej"),
    ("intro", "Tack för att du valde oss."),
    ("cta_confirm", "Bekräfta bokning"),
    ("cta_view", "Visa detaljer"),
    ("vehicle_ready", "Din bil är redo att hämtas."),
    ("questions", "Frågor? Svara bara på det här mejlet."),
    ("thanks", "Tack"),
    ("signature", "Med vänliga hälsningar"),
    ("unsubscribe", "Avsluta prenumeration"),
];

const DA: [(&str, &str); 9] = [
    ("greeting", "Hej"),
    ("intro", "Tak fordi du valgte os."),
    ("cta_confirm", "Bekræft booking"),
    ("cta_view", "Se detaljer"),
    ("vehicle_ready", "Din bil er klar til afhentning."),
    ("questions", "Spørgsmål? Svar blot på denne e-mail."),
    ("thanks", "Tak"),
    ("signature", "Med venlig hilsen"),
    ("unsubscribe", "Afmeld"),
];

const NO: [(&str, &str); 9] = [
    ("greeting", "Hei"),
    ("intro", "Takk for at du valgte oss."),
    ("cta_confirm", "Bekreft bestilling"),
    ("cta_view", "Se detaljer"),
    ("vehicle_ready", "Bilen din er klar til henting."),
    ("questions", "Spørsmål? Bare svar på denne e-posten."),
    ("thanks", "Takk"),
    ("signature", "Med vennlig hilsen"),
    ("unsubscribe", "Meld av"),
];

/// Get the built-in phrase table for a locale
pub fn builtin_phrases(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => &EN,
        Locale::De => &DE,
        Locale::Fr => &FR,
        Locale::Sv => &SV,
        Locale::Da => &DA,
        Locale::No => &NO,
    }
}
