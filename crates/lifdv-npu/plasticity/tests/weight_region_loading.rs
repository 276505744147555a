// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! Integration tests for weight-dependence region loading
//!
//! Covers the buffer layout shared with the host serializer, end-offset
//! chaining, and whole-table replacement on re-initialization.

use lifdv_npu_neural::{words_from_le_bytes, words_to_le_bytes, SynapseType, SYNAPSE_TYPE_COUNT};
use lifdv_npu_plasticity::*;
use proptest::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

/// Run `f` with INFO-level events written into the returned log
fn with_captured_log<T>(f: impl FnOnce() -> T) -> (T, String) {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, log.contents())
}

fn ordered_region() -> impl Strategy<Value = WeightRegion> {
    (any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(a, b, scale)| {
        WeightRegion::new(a.min(b), a.max(b), scale)
    })
}

#[test]
fn test_reinitialise_leaves_no_residue() {
    let first = [-100, 100, 11, -200, 200, 22];
    let second = [0, 1, 0, 0, 2, 0];

    let mut table = WeightRegionTable::new();
    table.initialise(&first, 0, &[]).unwrap();
    table.initialise(&second, 0, &[]).unwrap();

    let (fresh, _) = WeightRegionTable::from_region(&second, 0).unwrap();
    assert_eq!(table, fresh);
    for (synapse_type, region) in table.iter() {
        assert_ne!(region.scale, first[synapse_type.index() * WEIGHT_REGION_WORDS + 2]);
    }
}

#[test]
fn test_end_offset_chains_into_next_region() {
    // [header][weight region][trailing region]
    let mut words = vec![0xAB];
    let table = WeightRegionTable::from_regions([
        WeightRegion::new(0, 512, 32),
        WeightRegion::new(0, 256, 16),
    ]);
    table.write_region(&mut words);
    words.extend_from_slice(&[7, 8, 9]);

    let mut loaded = WeightRegionTable::new();
    let end = loaded.initialise(&words, 1, &[1, 1]).unwrap();

    assert_eq!(end, 1 + 3 * SYNAPSE_TYPE_COUNT);
    assert_eq!(&words[end..], &[7, 8, 9]);
    assert_eq!(loaded, table);
}

#[test]
fn test_loads_from_little_endian_bytes() {
    let table = WeightRegionTable::from_regions([
        WeightRegion::new(-1, i32::MAX, 3),
        WeightRegion::new(i32::MIN, 0, -4),
    ]);
    let mut words = Vec::new();
    table.write_region(&mut words);
    let bytes = words_to_le_bytes(&words);

    // Exact byte layout: min, max, scale per type, little-endian
    assert_eq!(&bytes[0..4], &(-1i32).to_le_bytes());
    assert_eq!(&bytes[4..8], &i32::MAX.to_le_bytes());
    assert_eq!(&bytes[20..24], &(-4i32).to_le_bytes());

    let decoded = words_from_le_bytes(&bytes).unwrap();
    let (loaded, end) = WeightRegionTable::from_region(&decoded, 0).unwrap();
    assert_eq!(loaded, table);
    assert_eq!(end, WEIGHT_DV_REGION_WORDS);
}

#[test]
fn test_rejected_region_logs_no_bounds() {
    // Type 0 is valid, type 1 is inverted
    let words = [0, 100, 5, 10, -10, 1];
    let mut table = WeightRegionTable::new();

    let (result, log) = with_captured_log(|| table.initialise(&words, 0, &[]));

    assert!(result.is_err());
    assert!(log.contains("weight_initialise: starting"));
    assert!(!log.contains("Synapse type"), "logged uninstalled bounds:\n{}", log);
    assert!(!log.contains("completed successfully"));
}

#[test]
fn test_installed_region_logs_every_type() {
    let words = [0, 100, 5, -50, 0, 7];
    let mut table = WeightRegionTable::new();

    let (result, log) = with_captured_log(|| table.initialise(&words, 0, &[]));

    assert_eq!(result.unwrap(), WEIGHT_DV_REGION_WORDS);
    assert!(log.contains("Synapse type 0: Min weight:0, Max weight:100, scale+:5"));
    assert!(log.contains("Synapse type 1: Min weight:-50, Max weight:0, scale+:7"));
    assert!(log.contains("completed successfully"));
}

#[test]
fn test_weight_dependence_as_trait_object() {
    let mut dependence: Box<dyn WeightDependence> = Box::new(WeightRegionTable::new());
    let words = [0, 10, 1, 0, 20, 2];
    dependence.initialise(&words, 0, &[]).unwrap();

    assert_eq!(dependence.region(SynapseType::Inhibitory).max_weight, 20);
    assert!(!dependence.name().is_empty());
}

proptest! {
    #[test]
    fn prop_serialized_table_round_trips(
        exc in ordered_region(),
        inh in ordered_region(),
        start in 0usize..16,
    ) {
        let table = WeightRegionTable::from_regions([exc, inh]);
        let mut words = vec![0; start];
        table.write_region(&mut words);

        let (loaded, end) = WeightRegionTable::from_region(&words, start).unwrap();
        prop_assert_eq!(loaded, table);
        prop_assert_eq!(end, start + 3 * SYNAPSE_TYPE_COUNT);
    }

    #[test]
    fn prop_second_load_wins(
        first in prop::array::uniform2(ordered_region()),
        second in prop::array::uniform2(ordered_region()),
    ) {
        let mut table = WeightRegionTable::from_regions(first);
        let mut words = Vec::new();
        WeightRegionTable::from_regions(second).write_region(&mut words);

        table.initialise(&words, 0, &[]).unwrap();
        prop_assert_eq!(table.regions(), &second);
    }
}
