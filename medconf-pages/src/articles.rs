use medconf_content::{ContentSpec, MediaKind};

use crate::bi;

pub(crate) fn spec() -> ContentSpec {
    ContentSpec::new("articles")
        .text("title", bi("المقالات", "Articles"))
        .rich(
            "intro_text",
            bi(
                "مقالات حول جودة التعليم الطبي المستمر وتنظيم المؤتمرات.",
                "Writing on continuing medical education quality and conference organization.",
            ),
        )
        .media("banner_image", MediaKind::Image, None)
        .text("read_more", bi("اقرأ المزيد", "Read more"))
        .text("empty_state", bi("لا توجد مقالات بعد.", "No articles yet."))
        .text("search_placeholder", bi("ابحث في المقالات", "Search articles"))
}
