use medconf_content::{ContentSpec, ItemShape, MediaKind, MediaRef, StaticItem};

use crate::bi;

pub(crate) fn spec() -> ContentSpec {
    ContentSpec::new("about")
        .text("title", bi("من نحن", "About us"))
        .rich(
            "intro_text",
            bi(
                "منصة متخصصة في تقييم المؤتمرات الطبية في المنطقة العربية.\n\nنعمل مع الجمعيات العلمية والمستشفيات والجامعات.",
                "A platform dedicated to evaluating medical conferences across the Arab region.\n\nWe work with scientific societies, hospitals and universities.",
            ),
        )
        .text("mission_title", bi("رسالتنا", "Our mission"))
        .rich(
            "mission_text",
            bi(
                "رفع جودة التعليم الطبي المستمر من خلال:\n- معايير تقييم شفافة\n- مقيّمين مستقلين\n- توصيات قابلة للتطبيق",
                "Raising the quality of continuing medical education through:\n- Transparent evaluation criteria\n- Independent reviewers\n- Actionable recommendations",
            ),
        )
        .text("vision_title", bi("رؤيتنا", "Our vision"))
        .rich(
            "vision_text",
            bi(
                "أن نكون المرجع الأول لجودة المؤتمرات الطبية عربياً.",
                "To be the leading reference for medical conference quality in the Arab world.",
            ),
        )
        .collection(
            "values",
            ItemShape::Card,
            vec![
                StaticItem::card(
                    "⚖️",
                    bi("الحياد", "Impartiality"),
                    bi("لا نقيّم مؤتمرات نشارك في تنظيمها.", "We never evaluate events we help organize."),
                ),
                StaticItem::card(
                    "🔬",
                    bi("الدقة العلمية", "Scientific rigor"),
                    bi("معايير مبنية على الأدلة.", "Evidence-based criteria."),
                ),
                StaticItem::card(
                    "🌍",
                    bi("الشمول", "Inclusiveness"),
                    bi("تقييم ثنائي اللغة لكل الجمهور.", "Bilingual evaluation for every audience."),
                ),
            ],
        )
        .media(
            "team_image",
            MediaKind::Image,
            Some(MediaRef::url("/uploads/about/team.jpg")),
        )
}
