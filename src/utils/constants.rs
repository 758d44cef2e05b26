/// Measurement unit used throughout ARSO report tables.
pub const UNIT_UG_M3: &str = "μg/m³";

/// Detail classification for ozone rows before the second summary table.
pub const DETAIL_HOURLY_EXCEEDANCE: &str = "Concentration > 180 μg/m³";

/// Detail classification for ozone rows after the second summary table.
pub const DETAIL_8H_EXCEEDANCE: &str = "Concentration > 120 μg/m³ for at least 8 hours";

/// Section heading that switches the ozone detail classification.
pub const OZONE_SECTION_SWITCH: &str = "Preglednica 2";

/// Aggregation stored with every PM2.5 daily value.
pub const AGGREGATION_DAILY_AVERAGE: &str = "daily_average";

/// Months per label-prefixed report row.
pub const MONTHS_PER_ROW: usize = 12;

/// Default output root for extracted JSON.
pub const DEFAULT_OUTPUT_DIR: &str = "data/ARSO";

/// Default glob pattern for input discovery.
pub const DEFAULT_PDF_PATTERN: &str = "*.pdf";

/// Directory prefix for the cumulative per-location output.
pub const LOCATION_DIR_PREFIX: &str = "po_lokacijah";

/// Measurement sites reported in the ozone exceedance tables.
pub const OZONE_LOCATIONS: &[&str] = &[
    "Ljubljana Bežigrad",
    "Maribor Vrbanski plato",
    "Celje",
    "Murska Sobota",
    "Nova Gorica",
    "Koper",
    "Trbovlje",
    "Zagorje",
    "Hrastnik",
    "Novo mesto",
    "Iskrba",
    "Otlica",
    "Krvavec",
];

/// Label variants seen in older reports, mapped to canonical site names.
pub const OZONE_ALIASES: &[(&str, &str)] = &[
    ("MB Vrbanski plato", "Maribor Vrbanski plato"),
    ("MB Vrbanski", "Maribor Vrbanski plato"),
    ("LJ Bežigrad", "Ljubljana Bežigrad"),
    ("CE bolnica", "Celje"),
    ("MS Rakičan", "Murska Sobota"),
    ("NG Grčna", "Nova Gorica"),
];

/// PM2.5 station columns, in the order they appear in the report tables.
pub const PM25_LOCATIONS: &[&str] = &[
    "Ljubljana Biotehniška fakulteta",
    "Maribor center",
    "Maribor Vrbanski plato",
    "Iskrba",
];
