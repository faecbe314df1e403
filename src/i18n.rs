//! Static translation table for the two supported display languages.
//!
//! Lookup never fails: an unknown key is returned unchanged so a missing
//! entry shows up as the raw key in the UI instead of crashing anything.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Active display/response language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// BCP 47 tag for the `lang` attribute and API locale directives.
    pub fn lang_tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    /// Language name spelled out for prompt directives.
    pub fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "Arabic",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

/// Look up a UI string. Unknown keys echo back unchanged.
pub fn tr(locale: Locale, key: &str) -> &str {
    match TABLE.binary_search_by_key(&key, |&(k, _, _)| k) {
        Ok(idx) => {
            let (_, en, ar) = TABLE[idx];
            match locale {
                Locale::En => en,
                Locale::Ar => ar,
            }
        }
        Err(_) => key,
    }
}

/// (key, English, Arabic) — MUST stay sorted by key for the binary search.
static TABLE: &[(&str, &str, &str)] = &[
    ("app.tagline", "Turn your scrap pile into workshop projects", "حوّل كومة الخردة لديك إلى مشاريع ورشة"),
    ("app.title", "ScrapForge", "سكراب فورج"),
    ("chat.error", "The assistant hit a snag. Try again.", "واجه المساعد عطلًا. حاول مرة أخرى."),
    ("chat.greeting", "Scrappy here. Nothing on this bench is garbage yet — tell me what you are salvaging today.", "أنا سكرابي. لا شيء على هذه الطاولة نفاية بعد — أخبرني ما الذي تنقذه اليوم."),
    ("chat.placeholder", "Ask the workshop assistant…", "اسأل مساعد الورشة…"),
    ("chat.send", "Send", "إرسال"),
    ("chat.thinking", "Thinking…", "يفكر…"),
    ("difficulty.easy", "Easy", "سهل"),
    ("difficulty.hard", "Hard", "صعب"),
    ("difficulty.label", "Difficulty", "مستوى الصعوبة"),
    ("difficulty.medium", "Medium", "متوسط"),
    ("error.no_api_key", "No API key was configured at build time.", "لم يُضبط مفتاح واجهة البرمجة أثناء البناء."),
    ("error.plan", "Could not fetch the fabrication plan. Try again.", "تعذّر جلب خطة التصنيع. حاول مرة أخرى."),
    ("error.suggestions", "Could not generate suggestions. Try again.", "تعذّر توليد الاقتراحات. حاول مرة أخرى."),
    ("inventory.add", "Add", "إضافة"),
    ("inventory.empty_hint", "Log the waste materials you have and ScrapForge will design projects around them.", "سجّل مواد النفايات المتوفرة لديك وسيصمم سكراب فورج مشاريع حولها."),
    ("inventory.generate", "Suggest projects", "اقترح مشاريع"),
    ("inventory.name_placeholder", "Material (e.g. plastic bottles)", "المادة (مثل قوارير بلاستيكية)"),
    ("inventory.quantity_placeholder", "Qty", "الكمية"),
    ("inventory.remove", "Remove", "إزالة"),
    ("inventory.title", "Waste inventory", "مخزون النفايات"),
    ("inventory.unit_placeholder", "Unit", "الوحدة"),
    ("lang.toggle", "العربية", "English"),
    ("plan.back", "Back to ideas", "العودة إلى الأفكار"),
    ("plan.loading", "Drafting the fabrication plan…", "جارٍ إعداد خطة التصنيع…"),
    ("plan.over_budget", "Exceeds the declared 15 kWh budget", "يتجاوز حد ١٥ كيلوواط·ساعة المعلن"),
    ("plan.power_kwh", "kWh", "كيلوواط·ساعة"),
    ("plan.power_task", "Task", "المهمة"),
    ("plan.power_title", "Power consumption", "استهلاك الطاقة"),
    ("plan.power_total", "Total", "الإجمالي"),
    ("plan.steps_title", "Fabrication steps", "خطوات التصنيع"),
    ("suggestions.build", "Build this", "ابنِ هذا"),
    ("suggestions.loading", "Designing projects…", "جارٍ تصميم المشاريع…"),
    ("suggestions.materials", "Materials required", "المواد المطلوبة"),
    ("suggestions.no_image", "No preview", "لا توجد معاينة"),
    ("suggestions.start_over", "Start over", "البدء من جديد"),
    ("suggestions.title", "Project ideas", "أفكار المشاريع"),
    ("tab.assistant", "Assistant", "المساعد"),
    ("tab.recycler", "Recycler", "إعادة التدوير"),
    ("unit.default", "pcs", "قطعة"),
];

#[cfg(test)]
pub(crate) fn table() -> &'static [(&'static str, &'static str, &'static str)] {
    TABLE
}
