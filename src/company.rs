pub const NAME: &str = "Millat Polymer & Rubber (Pvt) Ltd";
pub const SHORT_NAME: &str = "Millat Polymer Industries";
pub const LOGO: &str = "/images/logo.png";
pub const ADDRESS_LINES: [&str; 2] = ["Omer Chowk, Bund Road", "Lahore, Punjab, Pakistan"];

pub const PHONE_DISPLAY: &str = "+92 300 8474507";
pub const PHONE_HREF: &str = "tel:+923008474507";
pub const EMAIL: &str = "millatpolymer@gmail.com";
pub const EMAIL_HREF: &str = "mailto:millatpolymer@gmail.com";
pub const WHATSAPP_HREF: &str = "https://wa.me/923008474507";

pub const MAP_IMAGE: &str = "https://i.postimg.cc/cHVTR6Qj/Screenshot-2025-08-15-152611.png";
pub const MAP_HREF: &str = "https://www.google.com/maps/place/Millat+Polymer+%26+Rubber+(+Pvt+)+Ltd/@31.5459712,74.2594674,17z/data=!3m1!4b1!4m6!3m5!1s0x391902d73f4f1233:0x679e8ae410d24eb2!8m2!3d31.5459712!4d74.2620477!16s%2Fg%2F11fzjnz6mv?entry=ttu&g_ep=EgoyMDI1MDgxMi4wIKXMDSoASAFQAw%3D%3D";

pub const FACEBOOK_HREF: &str = "https://www.facebook.com/millatpolymer";
pub const LINKEDIN_HREF: &str = "https://www.linkedin.com/company/millat-polymer";
