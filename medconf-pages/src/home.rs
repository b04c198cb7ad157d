use medconf_content::{ContentSpec, ItemShape, MediaKind, MediaRef, StaticItem};
use medconf_types::BilingualValue;

use crate::bi;

pub(crate) fn spec() -> ContentSpec {
    ContentSpec::new("home")
        .text(
            "hero_title",
            bi(
                "تقييم علمي مستقل للمؤتمرات الطبية",
                "Independent scientific evaluation of medical conferences",
            ),
        )
        .rich(
            "hero_subtitle",
            bi(
                "نساعد الجهات المنظمة على رفع جودة المحتوى العلمي وتجربة الحضور.",
                "We help organizers raise the quality of scientific content and the attendee experience.",
            ),
        )
        .text("cta_primary", bi("اطلب تقييماً", "Request an evaluation"))
        .text("cta_secondary", bi("تصفح المؤتمرات", "Browse conferences"))
        .media(
            "hero_image",
            MediaKind::Image,
            Some(MediaRef::pair("/uploads/home/", "hero.jpg")),
        )
        .media("hero_video", MediaKind::Video, None)
        .text("services_title", bi("خدماتنا", "Our services"))
        .collection(
            "services",
            ItemShape::Card,
            vec![
                StaticItem::card(
                    "🩺",
                    bi("تقييم المحتوى العلمي", "Scientific content review"),
                    bi(
                        "مراجعة الجلسات والمتحدثين وفق معايير موحدة.",
                        "Sessions and speakers reviewed against uniform criteria.",
                    ),
                ),
                StaticItem::card(
                    "📊",
                    bi("تقارير مفصلة", "Detailed reports"),
                    bi(
                        "تقارير قابلة للمقارنة بعد كل مؤتمر.",
                        "Comparable reports delivered after every conference.",
                    ),
                ),
                StaticItem::card(
                    "🏅",
                    bi("دعم الاعتماد", "Accreditation support"),
                    bi(
                        "إعداد الملفات المطلوبة لساعات التعليم الطبي المستمر.",
                        "Preparing the documentation required for CME hours.",
                    ),
                ),
                StaticItem::card(
                    "🤝",
                    bi("استشارات التنظيم", "Organizer consulting"),
                    bi(
                        "توصيات عملية لتحسين البرنامج والتنظيم.",
                        "Practical recommendations for program and logistics.",
                    ),
                ),
            ],
        )
        .collection(
            "stats",
            ItemShape::Stat,
            vec![
                StaticItem::stat(bi("مؤتمر تم تقييمه", "Conferences evaluated"), BilingualValue::same("120+")),
                StaticItem::stat(bi("خبير مقيّم", "Expert reviewers"), BilingualValue::same("45")),
                StaticItem::stat(bi("دولة", "Countries"), BilingualValue::same("12")),
            ],
        )
}
