use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arso_extractor::models::{pollutant, ReportYear};
use arso_extractor::readers::{OzoneReader, Pm25Reader};
use arso_extractor::utils::year::detect_year;
use arso_extractor::writers::JsonWriter;
use tempfile::TempDir;

fn read_json(path: &Path) -> serde_json::Value {
    let file = File::open(path).expect("output file exists");
    serde_json::from_reader(BufReader::new(file)).expect("valid JSON")
}

#[test]
fn ozone_pipeline_extracts_and_persists() {
    let pages = vec![
        "Preglednica 1: Število ur s preseganji\n\
         LJ Bežigrad 1 2 3 - 5 6 7 8 9 10 11 12\n\
         Celje - - - - - - - - - - - 4"
            .to_string(),
        "Preglednica 2: Število dni s preseganji\n\
         Celje 1 1 1 1 1 1 1 1 1 1 1 1"
            .to_string(),
    ];

    let extraction = OzoneReader::new().read_pages(pages);
    assert_eq!(extraction.len(), 11 + 1 + 12);

    let source = Path::new("porocilo_2013.pdf");
    let year = detect_year(&extraction.all, source);
    assert_eq!(year, ReportYear::Known(2013));

    let out = TempDir::new().unwrap();
    let writer = JsonWriter::new(out.path());
    let summary = writer
        .write_report(pollutant::OZONE, year, source, &extraction)
        .unwrap();
    assert_eq!(summary.total_measurements, 24);
    assert_eq!(summary.location_files, 2);

    let all = read_json(&summary.all_file);
    assert_eq!(all["pollutant"], "Ozone");
    assert_eq!(all["year"], 2013);
    assert_eq!(all["total_measurements"], 24);
    assert_eq!(all["data"].as_array().unwrap().len(), 24);

    // Celje holds one hourly-threshold entry and twelve 8-hour entries.
    let celje = read_json(
        &out.path()
            .join("Ozone_2013")
            .join("po_lokacijah_2013")
            .join("Celje.json"),
    );
    assert_eq!(celje["total_measurements"], 13);
}

#[test]
fn rerun_overwrites_all_file_but_leaves_location_files_deduplicated() {
    let pages = vec!["MS Rakičan 5 5 5 5 5 5 5 5 5 5 5 5".to_string()];
    let reader = OzoneReader::new();
    let source = Path::new("Ozone_2014.pdf");

    let out = TempDir::new().unwrap();
    let writer = JsonWriter::new(out.path());

    for _ in 0..2 {
        let extraction = reader.read_pages(pages.clone());
        let year = detect_year(&extraction.all, source);
        writer
            .write_report(pollutant::OZONE, year, source, &extraction)
            .unwrap();
    }

    let all = read_json(
        &out.path()
            .join("Ozone_2014")
            .join("Ozone_2014_all_Ozone_2014.json"),
    );
    assert_eq!(all["total_measurements"], 12);

    let location = read_json(
        &out.path()
            .join("Ozone_2014")
            .join("po_lokacijah_2014")
            .join("Murska_Sobota.json"),
    );
    assert_eq!(location["total_measurements"], 12);
    assert_eq!(location["location"], "Murska Sobota");
}

#[test]
fn pm25_pipeline_uses_dates_and_daily_aggregation() {
    let pages = vec![
        "Povprečne dnevne vrednosti\n\
         01.01.13 46 41 72 62\n\
         02.01.13 - 38 60 55"
            .to_string(),
    ];

    let extraction = Pm25Reader::new().read_pages(pages);
    assert_eq!(extraction.len(), 7);

    // Filename says 2014; the data says 2013 and wins.
    let source = Path::new("pm25_porocilo_2014.pdf");
    let year = detect_year(&extraction.all, source);
    assert_eq!(year, ReportYear::Known(2013));

    let out = TempDir::new().unwrap();
    let writer = JsonWriter::new(out.path());
    let summary = writer
        .write_report(pollutant::PM25, year, source, &extraction)
        .unwrap();
    assert_eq!(summary.location_files, 4);

    let iskrba = read_json(
        &out.path()
            .join("PM25_2013")
            .join("po_lokacijah_2013")
            .join("Iskrba.json"),
    );
    assert_eq!(iskrba["pollutant"], "PM2.5");
    assert_eq!(iskrba["data"][0]["date"], "2013-01-01");
    assert_eq!(iskrba["data"][0]["aggregation"], "daily_average");
    assert_eq!(iskrba["data"][0]["unit"], "μg/m³");
}

#[test]
fn merging_across_sources_accumulates_per_location() {
    let reader = Pm25Reader::new();
    let out = TempDir::new().unwrap();
    let writer = JsonWriter::new(out.path());

    let january = reader.read_pages(vec!["01.01.13 10 11 12 13".to_string()]);
    let year = detect_year(&january.all, Path::new("jan.pdf"));
    writer
        .write_report(pollutant::PM25, year, Path::new("jan.pdf"), &january)
        .unwrap();

    // Second source repeats January 1st and adds February 1st.
    let february = reader.read_pages(vec![
        "01.01.13 10 11 12 13\n01.02.13 20 21 22 23".to_string(),
    ]);
    let year = detect_year(&february.all, Path::new("feb.pdf"));
    writer
        .write_report(pollutant::PM25, year, Path::new("feb.pdf"), &february)
        .unwrap();

    let iskrba = read_json(
        &out.path()
            .join("PM25_2013")
            .join("po_lokacijah_2013")
            .join("Iskrba.json"),
    );
    assert_eq!(iskrba["total_measurements"], 2);
    assert_eq!(iskrba["data"][0]["date"], "2013-01-01");
    assert_eq!(iskrba["data"][1]["date"], "2013-02-01");

    // Per-source files exist independently for both inputs.
    assert!(out
        .path()
        .join("PM25_2013")
        .join("PM25_2013_all_jan.json")
        .exists());
    assert!(out
        .path()
        .join("PM25_2013")
        .join("PM25_2013_all_feb.json")
        .exists());
}

#[test]
fn unknown_year_falls_back_to_sentinel_naming() {
    let pages = vec!["Otlica 1 2 3 4 5 6 7 8 9 10 11 12".to_string()];
    let extraction = OzoneReader::new().read_pages(pages);

    let source = Path::new("report.pdf");
    let year = detect_year(&extraction.all, source);
    assert_eq!(year, ReportYear::Unknown);

    let out = TempDir::new().unwrap();
    let summary = JsonWriter::new(out.path())
        .write_report(pollutant::OZONE, year, source, &extraction)
        .unwrap();

    assert!(summary.all_file.ends_with("Ozone_unknown_all_report.json"));
    let all = read_json(&summary.all_file);
    assert_eq!(all["year"], "unknown");
}
