use medconf_content::{ContentSpec, ItemShape, MediaKind, StaticItem};

use crate::bi;

pub(crate) fn spec() -> ContentSpec {
    ContentSpec::new("conferences")
        .text("title", bi("المؤتمرات", "Conferences"))
        .rich(
            "intro_text",
            bi(
                "قائمة المؤتمرات التي قمنا بتقييمها مع ملخص النتائج.",
                "Conferences we have evaluated, with a summary of the findings.",
            ),
        )
        .media("banner_image", MediaKind::Image, None)
        .text("filter_label", bi("تصفية حسب التخصص", "Filter by specialty"))
        .text("empty_state", bi("لا توجد مؤتمرات حالياً.", "No conferences yet."))
        .text("rating_label", bi("التقييم العام", "Overall rating"))
        .collection(
            "criteria",
            ItemShape::Card,
            vec![
                StaticItem::card(
                    "📚",
                    bi("المحتوى العلمي", "Scientific content"),
                    bi("حداثة المحتوى وملاءمته للجمهور.", "Currency and relevance of the content."),
                ),
                StaticItem::card(
                    "🎤",
                    bi("المتحدثون", "Speakers"),
                    bi("الخبرة ووضوح العرض.", "Expertise and clarity of delivery."),
                ),
                StaticItem::card(
                    "🗂️",
                    bi("التنظيم", "Organization"),
                    bi("الالتزام بالجدول وسهولة التسجيل.", "Schedule adherence and ease of registration."),
                ),
            ],
        )
}
