use medconf_content::{ContentSpec, ItemShape, MediaKind, MediaRef, StaticItem};
use medconf_types::BilingualValue;

use crate::bi;

pub(crate) fn spec() -> ContentSpec {
    ContentSpec::new("founder")
        .text("title", bi("كلمة المؤسس", "A word from the founder"))
        .text("founder_name", bi("د. سارة العتيبي", "Dr. Sarah Al-Otaibi"))
        .text(
            "founder_role",
            bi("استشارية طب باطني ومؤسِّسة المنصة", "Internal medicine consultant and founder"),
        )
        .media(
            "founder_image",
            MediaKind::Image,
            Some(MediaRef::pair("/uploads/founder/", "portrait.jpg")),
        )
        .rich(
            "bio_text",
            bi(
                "بعد أكثر من خمسة عشر عاماً في الممارسة السريرية والتعليم الطبي، أسست المنصة لسد فجوة واضحة:\n- غياب معايير موحدة لتقييم المؤتمرات\n- ضعف التغذية الراجعة للمنظمين\n\nاليوم نعمل مع عشرات الجهات في المنطقة.",
                "After more than fifteen years in clinical practice and medical education, I founded the platform to close a clear gap:\n- No shared standard for evaluating conferences\n- Little feedback reaching organizers\n\nToday we work with dozens of institutions across the region.",
            ),
        )
        .collection(
            "milestones",
            ItemShape::Stat,
            vec![
                StaticItem::stat(bi("تأسيس المنصة", "Platform founded"), BilingualValue::same("2015")),
                StaticItem::stat(bi("أول تقرير إقليمي", "First regional report"), BilingualValue::same("2018")),
                StaticItem::stat(bi("التوسع إلى الخليج", "Expansion across the Gulf"), BilingualValue::same("2021")),
            ],
        )
        .rich(
            "quote_text",
            bi(
                "جودة المؤتمر تُقاس بما يتغير في ممارسة الطبيب بعده.",
                "A conference is measured by what changes in a physician's practice afterwards.",
            ),
        )
}
