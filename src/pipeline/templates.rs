//! Localized section labels and session strings.
//!
//! Manipuri is a supported input language without its own tables yet; it
//! resolves to the English entries, as does any unrecognized tag.

use super::language::SupportedLanguage;

/// Report sections in the order every prompt lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Disease,
    Symptoms,
    Description,
    Causes,
    Precautions,
    Prevention,
    MedicalHelp,
    LocalContext,
    Disclaimer,
}

impl SectionKey {
    pub const ORDER: [SectionKey; 9] = [
        SectionKey::Disease,
        SectionKey::Symptoms,
        SectionKey::Description,
        SectionKey::Causes,
        SectionKey::Precautions,
        SectionKey::Prevention,
        SectionKey::MedicalHelp,
        SectionKey::LocalContext,
        SectionKey::Disclaimer,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SectionKey::Disease => "disease",
            SectionKey::Symptoms => "symptoms",
            SectionKey::Description => "description",
            SectionKey::Causes => "causes",
            SectionKey::Precautions => "precautions",
            SectionKey::Prevention => "prevention",
            SectionKey::MedicalHelp => "medical_help",
            SectionKey::LocalContext => "local_context",
            SectionKey::Disclaimer => "disclaimer",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReportTemplate {
    pub disease: &'static str,
    pub symptoms: &'static str,
    pub description: &'static str,
    pub causes: &'static str,
    pub precautions: &'static str,
    pub prevention: &'static str,
    pub medical_help: &'static str,
    pub local_context: &'static str,
    pub disclaimer: &'static str,
}

impl ReportTemplate {
    pub fn label(&self, key: SectionKey) -> &'static str {
        match key {
            SectionKey::Disease => self.disease,
            SectionKey::Symptoms => self.symptoms,
            SectionKey::Description => self.description,
            SectionKey::Causes => self.causes,
            SectionKey::Precautions => self.precautions,
            SectionKey::Prevention => self.prevention,
            SectionKey::MedicalHelp => self.medical_help,
            SectionKey::LocalContext => self.local_context,
            SectionKey::Disclaimer => self.disclaimer,
        }
    }

    /// All nine labels in canonical section order.
    pub fn sections(&self) -> [(SectionKey, &'static str); 9] {
        SectionKey::ORDER.map(|key| (key, self.label(key)))
    }
}

static ENGLISH: ReportTemplate = ReportTemplate {
    disease: "🔍 **DISEASE IDENTIFIED**",
    symptoms: "📋 **SYMPTOM ANALYSIS**",
    description: "🦠 **WHAT IS THIS DISEASE**",
    causes: "🌊 **WHY IT HAPPENS (Causes)**",
    precautions: "⚠️ **IMMEDIATE PRECAUTIONS**",
    prevention: "🛡️ **PREVENTION MEASURES**",
    medical_help: "🏥 **WHEN TO SEEK MEDICAL HELP**",
    local_context: "📍 **NORTHEAST INDIA CONTEXT**",
    disclaimer: "⚠️ **MEDICAL DISCLAIMER**: This is for educational purposes only. Please consult a qualified doctor immediately for proper diagnosis and treatment.",
};

static HINDI: ReportTemplate = ReportTemplate {
    disease: "🔍 **पहचानी गई बीमारी**",
    symptoms: "📋 **लक्षण विश्लेषण**",
    description: "🦠 **यह बीमारी क्या है**",
    causes: "🌊 **यह क्यों होता है (कारण)**",
    precautions: "⚠️ **तत्काल सावधानियां**",
    prevention: "🛡️ **बचाव के उपाय**",
    medical_help: "🏥 **डॉक्टर से कब मिलें**",
    local_context: "📍 **पूर्वोत्तर भारत संदर्भ**",
    disclaimer: "⚠️ **चिकित्सा अस्वीकरण**: यह केवल शैक्षणिक उद्देश्यों के लिए है। कृपया उचित निदान और उपचार के लिए तुरंत योग्य डॉक्टर से सलाह लें।",
};

static BENGALI: ReportTemplate = ReportTemplate {
    disease: "🔍 **চিহ্নিত রোগ**",
    symptoms: "📋 **লক্ষণ বিশ্লেষণ**",
    description: "🦠 **এই রোগ কি**",
    causes: "🌊 **কেন এটি হয় (কারণসমূহ)**",
    precautions: "⚠️ **অবিলম্বে সতর্কতা**",
    prevention: "🛡️ **প্রতিরোধের ব্যবস্থা**",
    medical_help: "🏥 **কখন ডাক্তার দেখাবেন**",
    local_context: "📍 **উত্তর-পূর্ব ভারত প্রসঙ্গ**",
    disclaimer: "⚠️ **চিকিৎসা দাবিত্যাগ**: এটি শুধুমাত্র শিক্ষামূলক উদ্দেশ্যে। সঠিক নির্ণয় ও চিকিৎসার জন্য অবিলম্বে যোগ্য ডাক্তারের পরামর্শ নিন।",
};

static ASSAMESE: ReportTemplate = ReportTemplate {
    disease: "🔍 **চিনাক্ত কৰা ৰোগ**",
    symptoms: "📋 **লক্ষণ বিশ্লেষণ**",
    description: "🦠 **এই ৰোগ কি**",
    causes: "🌊 **কিয় এনে হয় (কাৰণসমূহ)**",
    precautions: "⚠️ **তৎক্ষণাৎ সাৱধানতা**",
    prevention: "🛡️ **প্ৰতিৰোধৰ ব্যৱস্থা**",
    medical_help: "🏥 **কেতিয়া চিকিৎসক দেখুৱাব**",
    local_context: "📍 **উত্তৰ-পূব ভাৰত প্ৰসংগ**",
    disclaimer: "⚠️ **চিকিৎসা দাবী ত্যাগ**: এইটো কেৱল শিক্ষামূলক উদ্দেশ্যৰ বাবে। সঠিক নিদান আৰু চিকিৎসাৰ বাবে অবিলম্বে যোগ্য চিকিৎসকৰ পৰামৰ্শ লওক।",
};

pub fn templates_for(language: SupportedLanguage) -> &'static ReportTemplate {
    match language {
        SupportedLanguage::English => &ENGLISH,
        SupportedLanguage::Hindi => &HINDI,
        SupportedLanguage::Bengali => &BENGALI,
        SupportedLanguage::Assamese => &ASSAMESE,
        SupportedLanguage::Manipuri => &ENGLISH,
    }
}

/// Resolve a free-form language tag; unknown tags get the English table.
pub fn templates_for_tag(tag: &str) -> &'static ReportTemplate {
    match tag.parse::<SupportedLanguage>() {
        Ok(language) => templates_for(language),
        Err(_) => &ENGLISH,
    }
}

/// Session-level strings shown around a report.
#[derive(Debug, PartialEq, Eq)]
pub struct SessionMessages {
    pub analyzing: &'static str,
    pub retry_hint: &'static str,
}

static ENGLISH_MESSAGES: SessionMessages = SessionMessages {
    analyzing: "🔄 Analyzing symptoms...",
    retry_hint: "🔄 Please try again or check your connection.",
};

static HINDI_MESSAGES: SessionMessages = SessionMessages {
    analyzing: "🔄 लक्षणों का विश्लेषण किया जा रहा है...",
    retry_hint: "🔄 कृपया फिर से प्रयास करें या अपना कनेक्शन जांचें।",
};

static BENGALI_MESSAGES: SessionMessages = SessionMessages {
    analyzing: "🔄 লক্ষণ বিশ্লেষণ করা হচ্ছে...",
    retry_hint: "🔄 অনুগ্রহ করে আবার চেষ্টা করুন বা আপনার সংযোগ পরীক্ষা করুন।",
};

static ASSAMESE_MESSAGES: SessionMessages = SessionMessages {
    analyzing: "🔄 লক্ষণসমূহ বিশ্লেষণ কৰি থকা হৈছে...",
    retry_hint: "🔄 অনুগ্ৰহ কৰি পুনৰ চেষ্টা কৰক বা আপোনাৰ সংযোগ পৰীক্ষা কৰক।",
};

pub fn messages_for(language: SupportedLanguage) -> &'static SessionMessages {
    match language {
        SupportedLanguage::English => &ENGLISH_MESSAGES,
        SupportedLanguage::Hindi => &HINDI_MESSAGES,
        SupportedLanguage::Bengali => &BENGALI_MESSAGES,
        SupportedLanguage::Assamese => &ASSAMESE_MESSAGES,
        SupportedLanguage::Manipuri => &ENGLISH_MESSAGES,
    }
}
