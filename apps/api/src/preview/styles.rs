use serde::Serialize;

use crate::models::resume::TemplateId;

/// Class names for each styled region of the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleBundle {
    pub header_background: &'static str,
    pub header_text: &'static str,
    pub accent_border: &'static str,
    pub skill_badge: &'static str,
    pub organization_text: &'static str,
}

const MODERN: StyleBundle = StyleBundle {
    header_background: "bg-gradient-to-r from-blue-600 to-indigo-700",
    header_text: "text-white",
    accent_border: "border-blue-600",
    skill_badge: "bg-blue-100 text-blue-800",
    organization_text: "text-blue-600",
};

const CLASSIC: StyleBundle = StyleBundle {
    header_background: "bg-gray-900",
    header_text: "text-white",
    accent_border: "border-gray-900",
    skill_badge: "bg-gray-100 text-gray-800",
    organization_text: "text-gray-900",
};

const MINIMAL: StyleBundle = StyleBundle {
    header_background: "bg-white border-b-2 border-gray-300",
    header_text: "text-gray-900",
    accent_border: "border-gray-400",
    skill_badge: "bg-gray-50 text-gray-700",
    organization_text: "text-gray-700",
};

const CREATIVE: StyleBundle = StyleBundle {
    header_background: "bg-gradient-to-r from-purple-600 to-pink-600",
    header_text: "text-white",
    accent_border: "border-purple-600",
    skill_badge: "bg-purple-100 text-purple-800",
    organization_text: "text-purple-600",
};

pub fn style_bundle(template: TemplateId) -> StyleBundle {
    match template {
        TemplateId::Modern => MODERN,
        TemplateId::Classic => CLASSIC,
        TemplateId::Minimal => MINIMAL,
        TemplateId::Creative => CREATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_bundle_for_label(label: &str) -> StyleBundle {
        style_bundle(TemplateId::from_label(label))
    }

    #[test]
    fn test_unknown_label_maps_to_modern_bundle() {
        assert_eq!(style_bundle_for_label("neon"), style_bundle(TemplateId::Modern));
        assert_eq!(style_bundle_for_label(""), MODERN);
    }

    #[test]
    fn test_each_template_has_a_distinct_bundle() {
        let bundles: Vec<StyleBundle> = TemplateId::ALL.iter().map(|t| style_bundle(*t)).collect();
        for (i, a) in bundles.iter().enumerate() {
            for b in &bundles[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(style_bundle_for_label("Classic").header_background, "bg-gray-900");
    }
}
