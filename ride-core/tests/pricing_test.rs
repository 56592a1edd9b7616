//! Pricing engine tests: concrete scenarios, properties and error paths.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use ride_core::error::PricingError;
use ride_core::models::{
    OptionCatalog, PriceRequest, RideOption, TariffBand, TariffCatalog, TimeBand, VehicleClass,
};
use ride_core::pricing::calculate_price;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn band(
    vehicle_class: VehicleClass,
    time_band: TimeBand,
    base_fare: &str,
    per_km_rate: &str,
    per_minute_rate: &str,
) -> TariffBand {
    TariffBand {
        vehicle_class,
        time_band,
        base_fare: dec(base_fare),
        per_km_rate: dec(per_km_rate),
        per_minute_rate: dec(per_minute_rate),
    }
}

fn full_catalog() -> TariffCatalog {
    TariffCatalog::new(vec![
        band(VehicleClass::Standard, TimeBand::Peak, "5", "1.2", "0.5"),
        band(VehicleClass::Standard, TimeBand::OffPeak, "6.5", "1.5", "0.6"),
        band(VehicleClass::Premium, TimeBand::Peak, "10", "2.4", "0.9"),
        band(VehicleClass::Premium, TimeBand::OffPeak, "8", "2.0", "0.8"),
    ])
    .unwrap()
}

fn no_options() -> OptionCatalog {
    OptionCatalog::new(vec![]).unwrap()
}

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Tuesday afternoon, squarely inside the weekday peak band.
fn weekday_afternoon() -> NaiveDateTime {
    local(2025, 6, 3, 14, 0)
}

fn request(distance_km: &str, vehicle_class: VehicleClass, pickup: NaiveDateTime) -> PriceRequest {
    PriceRequest {
        distance_km: dec(distance_km),
        duration_min: None,
        vehicle_class,
        pickup_local: pickup,
        option_keys: HashSet::new(),
    }
}

#[test]
fn standard_weekday_quote_works() {
    let quote = calculate_price(
        &request("10", VehicleClass::Standard, weekday_afternoon()),
        &full_catalog(),
        &no_options(),
        dec("12.00"),
    )
    .unwrap();

    assert_eq!(quote.base_price, dec("17.00"));
    assert_eq!(quote.options_price, Decimal::ZERO);
    assert_eq!(quote.total_price, dec("17.00"));
}

#[test]
fn minimum_fare_floor_applies() {
    let quote = calculate_price(
        &request("10", VehicleClass::Standard, weekday_afternoon()),
        &full_catalog(),
        &no_options(),
        dec("20.00"),
    )
    .unwrap();

    assert_eq!(quote.base_price, dec("17.00"));
    assert_eq!(quote.total_price, dec("20.00"));
}

#[test]
fn premium_weekend_quote_with_option_works() {
    let options = OptionCatalog::new(vec![RideOption {
        key: "child_seat".to_string(),
        flat_fee: dec("3"),
    }])
    .unwrap();

    // Sunday morning resolves to the off-peak premium band.
    let mut req = request("2", VehicleClass::Premium, local(2025, 6, 8, 10, 0));
    req.option_keys.insert("child_seat".to_string());

    let quote = calculate_price(&req, &full_catalog(), &options, dec("15.00")).unwrap();

    assert_eq!(quote.base_price, dec("12.00"));
    assert_eq!(quote.options_price, dec("3.00"));
    assert_eq!(quote.total_price, dec("15.00"));
}

#[test]
fn duration_term_applies_only_when_supplied() {
    let mut req = request("10", VehicleClass::Standard, weekday_afternoon());

    let without = calculate_price(&req, &full_catalog(), &no_options(), dec("0")).unwrap();
    assert_eq!(without.base_price, dec("17.00"));

    req.duration_min = Some(20);
    let with = calculate_price(&req, &full_catalog(), &no_options(), dec("0")).unwrap();
    assert_eq!(with.base_price, dec("27.00"));
}

#[test]
fn identical_requests_price_identically() {
    let req = request("7.3", VehicleClass::Premium, weekday_afternoon());
    let first = calculate_price(&req, &full_catalog(), &no_options(), dec("12.00")).unwrap();
    let second = calculate_price(&req, &full_catalog(), &no_options(), dec("12.00")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn total_never_undercuts_minimum_fare() {
    let minimum_fare = dec("9.00");
    for km in 0..=50 {
        let mut req = request("0", VehicleClass::Standard, weekday_afternoon());
        req.distance_km = Decimal::from(km);
        let quote = calculate_price(&req, &full_catalog(), &no_options(), minimum_fare).unwrap();
        assert!(
            quote.total_price >= minimum_fare,
            "total {} under minimum at {} km",
            quote.total_price,
            km
        );
    }
}

#[test]
fn longer_rides_never_get_cheaper() {
    let mut previous = Decimal::ZERO;
    for km in 0..=80 {
        let mut req = request("0", VehicleClass::Standard, weekday_afternoon());
        req.distance_km = Decimal::from(km);
        let quote = calculate_price(&req, &full_catalog(), &no_options(), dec("12.00")).unwrap();
        assert!(
            quote.total_price >= previous,
            "total dropped from {} to {} at {} km",
            previous,
            quote.total_price,
            km
        );
        previous = quote.total_price;
    }
}

#[test]
fn time_band_boundaries_pick_the_right_band() {
    // Zero distance isolates the base fare, which differs per band.
    let catalog = full_catalog();

    let off_peak = calculate_price(
        &request("0", VehicleClass::Standard, local(2025, 6, 3, 6, 59)),
        &catalog,
        &no_options(),
        dec("0"),
    )
    .unwrap();
    assert_eq!(off_peak.base_price, dec("6.50"));

    let peak = calculate_price(
        &request("0", VehicleClass::Standard, local(2025, 6, 3, 7, 0)),
        &catalog,
        &no_options(),
        dec("0"),
    )
    .unwrap();
    assert_eq!(peak.base_price, dec("5.00"));

    let saturday = calculate_price(
        &request("0", VehicleClass::Standard, local(2025, 6, 7, 14, 0)),
        &catalog,
        &no_options(),
        dec("0"),
    )
    .unwrap();
    assert_eq!(saturday.base_price, dec("6.50"));
}

#[test]
fn negative_distance_is_rejected() {
    let err = calculate_price(
        &request("-1", VehicleClass::Standard, weekday_afternoon()),
        &full_catalog(),
        &no_options(),
        dec("12.00"),
    )
    .unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput(_)));
}

#[test]
fn negative_duration_is_rejected() {
    let mut req = request("5", VehicleClass::Standard, weekday_afternoon());
    req.duration_min = Some(-10);
    let err = calculate_price(&req, &full_catalog(), &no_options(), dec("12.00")).unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput(_)));
}

#[test]
fn unknown_vehicle_class_is_rejected() {
    let standard_only = TariffCatalog::new(vec![
        band(VehicleClass::Standard, TimeBand::Peak, "5", "1.2", "0.5"),
        band(VehicleClass::Standard, TimeBand::OffPeak, "6.5", "1.5", "0.6"),
    ])
    .unwrap();

    let err = calculate_price(
        &request("5", VehicleClass::Premium, weekday_afternoon()),
        &standard_only,
        &no_options(),
        dec("12.00"),
    )
    .unwrap_err();
    assert_eq!(err, PricingError::UnknownVehicleClass(VehicleClass::Premium));
}

#[test]
fn missing_band_is_rejected() {
    // Standard is known, but only for the peak band.
    let peak_only = TariffCatalog::new(vec![band(
        VehicleClass::Standard,
        TimeBand::Peak,
        "5",
        "1.2",
        "0.5",
    )])
    .unwrap();

    let err = calculate_price(
        &request("5", VehicleClass::Standard, local(2025, 6, 7, 14, 0)),
        &peak_only,
        &no_options(),
        dec("12.00"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        PricingError::MissingTariff {
            vehicle_class: VehicleClass::Standard,
            time_band: TimeBand::OffPeak,
        }
    );
}

#[test]
fn unknown_option_keys_are_ignored() {
    let options = OptionCatalog::new(vec![RideOption {
        key: "pet_friendly".to_string(),
        flat_fee: dec("4"),
    }])
    .unwrap();

    let mut req = request("10", VehicleClass::Standard, weekday_afternoon());
    req.option_keys.insert("pet_friendly".to_string());
    req.option_keys.insert("no_such_option".to_string());

    let quote = calculate_price(&req, &full_catalog(), &options, dec("0")).unwrap();
    assert_eq!(quote.options_price, dec("4.00"));
    assert_eq!(quote.total_price, dec("21.00"));
}

#[test]
fn total_rounds_half_up_at_two_decimals() {
    let catalog = TariffCatalog::new(vec![band(
        VehicleClass::Standard,
        TimeBand::Peak,
        "10",
        "1.115",
        "0",
    )])
    .unwrap();

    let quote = calculate_price(
        &request("1", VehicleClass::Standard, weekday_afternoon()),
        &catalog,
        &no_options(),
        dec("0"),
    )
    .unwrap();

    // The split keeps full precision; only the total is rounded.
    assert_eq!(quote.base_price, dec("11.115"));
    assert_eq!(quote.total_price, dec("11.12"));
}
