#[cfg(test)]
mod tests {
    use comms::{RockRecords, Wire};
    use rand::*;
    use rusty_rocks::{testing::RecordingMap, *};

    const ROCKS: [&str; 8] = [
        "Basalt", "Granite", "Gneiss", "Olivine basalt", "Marble", "Schist", "GRANODIORITE", "Tuff",
    ];
    const PLACES: [&str; 6] = ["Iceland", "Scotland", "Lapland", "Hawaii", "Carrara", "Skye"];
    const NEEDLES: [&str; 10] = ["", "  ", "bas", "GRAN", "land", " ar ", "i", "x", "Tuff", "sky"];

    fn random_sample(id: usize) -> Sample {
        Sample::new(
            id.to_string(),
            ROCKS[random_range(0..ROCKS.len())],
            PLACES[random_range(0..PLACES.len())],
            random_range(-90.0..90.0),
            random_range(-180.0..180.0),
        )
    }

    fn random_dataset() -> Dataset {
        (0..random_range(0..200)).map(random_sample).collect()
    }

    fn random_mode() -> SearchMode {
        if random() {
            SearchMode::ByName
        } else {
            SearchMode::ByPlace
        }
    }

    fn two_samples() -> Dataset {
        let body = br#"[
            {"Rocks":"Basalt","Place":"Iceland","Id":1,"Latitude":64,"Longitude":-19},
            {"Rocks":"Granite","Place":"Scotland","Id":2,"Latitude":57,"Longitude":-4}
        ]"#;
        Dataset::from(RockRecords::from_wire(body).expect("valid body"))
    }

    fn loaded(dataset: Dataset) -> ViewController<RecordingMap> {
        let mut vc = ViewController::new(RecordingMap::default());
        vc.dataset_loaded(Ok(dataset));
        vc
    }

    #[test]
    fn empty_query_is_always_empty() {
        for _ in 0..50 {
            let d = random_dataset();
            assert!(filter(&d, random_mode(), "").is_empty());
        }
    }

    #[test]
    fn filter_is_sound_complete_and_stable() {
        for _ in 0..200 {
            let d = random_dataset();
            let mode = random_mode();
            let raw = NEEDLES[random_range(0..NEEDLES.len())];
            let needle = raw.trim().to_lowercase();
            let result = filter(&d, mode, raw);

            let expected = d
                .iter()
                .filter(|s| !needle.is_empty() && mode.field(s).to_lowercase().contains(&needle))
                .collect::<Vec<_>>();
            assert_eq!(result.iter().collect::<Vec<_>>(), expected, "{mode:?} {raw:?}");
        }
    }

    #[test]
    fn render_tracks_exactly_the_result() {
        let mut vc = loaded(random_dataset());
        for _ in 0..100 {
            let mode = random_mode();
            let raw = NEEDLES[random_range(0..NEEDLES.len())];
            vc.submit_search(mode, raw);
            assert_eq!(vc.markers().len(), vc.visible_count());
            assert_eq!(vc.markers().map().live_count(), vc.visible_count());
        }
    }

    #[test]
    fn gps_toggle_never_touches_sample_markers() {
        let mut vc = loaded(random_dataset());
        vc.submit_search(SearchMode::ByName, "a");
        let before = vc.markers().tracked_ids().cloned().collect::<Vec<_>>();

        vc.toggle_gps();
        vc.position_acquired(lat_lon(random_range(-90.0..90.0), random_range(-180.0..180.0)));
        vc.toggle_gps();

        let after = vc.markers().tracked_ids().cloned().collect::<Vec<_>>();
        assert_eq!(before, after);
        assert_eq!(vc.markers().map().live_count(), before.len());
    }

    #[test]
    fn scenario_name_search() {
        let mut vc = loaded(two_samples());
        let effects = vc.submit_search(SearchMode::ByName, "bas");
        assert_eq!(effects, vec![Effect::Page(PageUpdate::Readout("1 rock location".into()))]);
        let ids = vc
            .markers()
            .tracked_ids()
            .map(|id| id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn scenario_place_search() {
        let mut vc = loaded(two_samples());
        let effects = vc.submit_search(SearchMode::ByPlace, "land");
        assert_eq!(effects, vec![Effect::Page(PageUpdate::Readout("2 rock locations".into()))]);
        assert_eq!(vc.markers().len(), 2);
    }

    #[test]
    fn scenario_clear_after_search() {
        let mut vc = loaded(two_samples());
        vc.submit_search(SearchMode::ByPlace, "land");
        let effects = vc.clear_search();
        assert!(effects.contains(&Effect::Page(PageUpdate::Readout("0 rock locations".into()))));
        assert_eq!(vc.visible_count(), 0);
        assert_eq!(vc.markers().map().live_count(), 0);
    }

    #[test]
    fn csv_to_page() {
        let ingest = atlas::read_samples(
            "Id,Rocks,Place,Latitude,Longitude\n1,Basalt,Iceland,64,-19\n2,Granite,Scotland,57,-4\n"
                .as_bytes(),
        )
        .expect("readable csv");

        // what the server sends is what the page loads
        let body = ingest.dataset.to_records().to_wire().expect("encodes");
        let served = Dataset::from(RockRecords::from_wire(&body).expect("decodes"));
        assert_eq!(served, two_samples());
    }

    #[test]
    fn non_finite_row_does_not_spoil_the_payload() {
        let ingest = atlas::read_samples(
            "Id,Rocks,Place,Latitude,Longitude\n1,Basalt,Iceland,64,-19\n2,Granite,Scotland,NaN,-4\n3,Granite,Scotland,57,-4\n"
                .as_bytes(),
        )
        .expect("readable csv");
        assert_eq!(ingest.skipped.len(), 1);
        assert_eq!(ingest.skipped[0].0, 2);

        let body = ingest.dataset.to_records().to_wire().expect("encodes");
        let served = Dataset::from(RockRecords::from_wire(&body).expect("decodes"));
        assert_eq!(served.len(), 2);
        assert!(served.iter().all(|s| s.latitude().is_finite() && s.longitude().is_finite()));
    }
}
