use medconf_content::{ContentSpec, ItemShape, StaticItem};
use medconf_types::BilingualValue;

use crate::bi;

pub(crate) fn spec() -> ContentSpec {
    ContentSpec::new("contact")
        .text("title", bi("تواصل معنا", "Contact us"))
        .rich(
            "intro_text",
            bi(
                "يسعدنا الرد على استفساراتكم خلال يومي عمل.",
                "We are happy to answer your questions within two business days.",
            ),
        )
        .collection(
            "contact_details",
            ItemShape::Stat,
            vec![
                StaticItem::stat(bi("البريد الإلكتروني", "Email"), BilingualValue::same("info@medconf-eval.com")),
                StaticItem::stat(bi("الهاتف", "Phone"), BilingualValue::same("+966 11 000 0000")),
                StaticItem::stat(bi("العنوان", "Address"), bi("الرياض، المملكة العربية السعودية", "Riyadh, Saudi Arabia")),
                StaticItem::stat(bi("ساعات العمل", "Working hours"), bi("الأحد - الخميس، 9 ص - 5 م", "Sun - Thu, 9am - 5pm")),
            ],
        )
        .text("form_title", bi("أرسل رسالة", "Send a message"))
        .text("form_name_label", bi("الاسم", "Name"))
        .text("form_email_label", bi("البريد الإلكتروني", "Email"))
        .text("form_message_label", bi("الرسالة", "Message"))
        .text("form_submit", bi("إرسال", "Send"))
        .text(
            "form_success",
            bi("تم إرسال رسالتك بنجاح.", "Your message has been sent."),
        )
}
