pub mod ozone;
pub mod pdf_text;
pub mod pm25;

pub use ozone::OzoneReader;
pub use pm25::Pm25Reader;
