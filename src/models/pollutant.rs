/// Identity of a pollutant as it appears in output documents and file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pollutant {
    /// Name stored inside output documents, e.g. "PM2.5".
    pub name: &'static str,
    /// Tag used in file and directory names, e.g. "PM25".
    pub file_tag: &'static str,
}

pub const OZONE: Pollutant = Pollutant {
    name: "Ozone",
    file_tag: "Ozone",
};

pub const PM25: Pollutant = Pollutant {
    name: "PM2.5",
    file_tag: "PM25",
};
