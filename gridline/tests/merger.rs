use gridline::{CalendarFields, DayType, MergeConfig, Merger, Row, TimeSeriesTable};
use gridline_mock::{day, electricity, weather};

#[test]
fn merges_fixture_tables_on_common_days() {
    let merged = Merger::default()
        .merge(&electricity::daily(), &weather::daily())
        .unwrap();

    let table = merged.table.table();
    assert_eq!(
        table.timestamps().collect::<Vec<_>>(),
        vec![day(28), day(29), day(30)]
    );
    assert_eq!(
        table.fields(),
        &["load".to_string(), "rain".to_string(), "temp".to_string()]
    );
    assert_eq!(table.column("load").unwrap(), vec![Some(500.0), Some(600.0), Some(700.0)]);

    let cal = merged.table.calendar().unwrap();
    assert_eq!(cal.len(), 3);
    assert_eq!(
        cal.iter().map(|c| c.day_type).collect::<Vec<_>>(),
        vec![DayType::Weekend, DayType::Weekend, DayType::Weekday]
    );
    assert_eq!(cal[0], CalendarFields::of(day(28)));

    assert_eq!(merged.report.left_rows, 4);
    assert_eq!(merged.report.right_rows, 4);
    assert_eq!(merged.report.joined_rows, 3);
    assert_eq!(merged.report.dropped_rows(), 1);
    assert!(merged.report.missing_values.is_empty());
}

#[test]
fn calendar_can_be_skipped() {
    let m = Merger::new(MergeConfig::default().calendar(false))
        .merge(&electricity::daily(), &weather::daily())
        .unwrap();
    assert!(m.table.calendar().is_none());
    assert_eq!(m.table.len(), 3);
}

#[test]
fn nulls_after_merge_are_reported_not_dropped() {
    let left = TimeSeriesTable::from_rows(
        "time",
        vec!["load".into()],
        vec![
            Row::new(day(1), vec![None]),
            Row::new(day(2), vec![Some(1.0)]),
        ],
    )
    .unwrap();
    let right = TimeSeriesTable::from_rows(
        "time",
        vec!["temp".into()],
        vec![Row::new(day(1), vec![Some(5.0)]), Row::new(day(2), vec![Some(6.0)])],
    )
    .unwrap();
    let m = Merger::default().merge(&left, &right).unwrap();
    assert_eq!(m.table.len(), 2);
    assert_eq!(m.report.missing_values.len(), 1);
    assert!(m.report.to_string().contains("| 2015-03-01 00:00:00 | null | 5 |"));
}

#[test]
fn custom_suffixes_apply_to_shared_names() {
    let m = Merger::new(MergeConfig::default().suffixes("_elec", "_met"))
        .merge(&weather::daily(), &weather::daily())
        .unwrap();
    assert_eq!(m.table.table().fields()[0], "rain_elec");
    assert_eq!(m.table.table().fields()[3], "temp_met");
}
