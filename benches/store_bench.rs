use criterion::{black_box, criterion_group, criterion_main, Criterion};

use device_store::{Device, DeviceStore};

fn payload(i: u64) -> String {
    let device = Device {
        id: format!("SYSUN{:04}", i),
        name: "NONAME (MB GIGABYTE GA-H61M-S1)".to_string(),
        kind: "SYSUN".to_string(),
        ..Device::default()
    };
    serde_json::to_string(&device).unwrap()
}

fn bench_put(c: &mut Criterion) {
    let store = DeviceStore::new();

    c.bench_function("store_put", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("bench:key:{}", i);
            store.put(black_box(&key), black_box(&payload(i))).unwrap();
            i += 1;
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let store = DeviceStore::new();

    // Pre-populate.
    for i in 0..1000 {
        let key = format!("bench:key:{:04}", i);
        store.put(&key, &payload(i)).unwrap();
    }

    c.bench_function("store_get", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("bench:key:{:04}", i % 1000);
            let _ = store.get(black_box(&key)).unwrap();
            i += 1;
        });
    });
}

fn bench_collection(c: &mut Criterion) {
    let store = DeviceStore::new();

    for i in 0..1000 {
        let key = format!("bench:key:{:04}", i);
        store.put(&key, &payload(i)).unwrap();
    }

    c.bench_function("store_collection_1000", |b| {
        b.iter(|| {
            let snapshot = store.collection();
            assert_eq!(snapshot.len(), 1000);
        });
    });
}

criterion_group!(benches, bench_put, bench_get, bench_collection);
criterion_main!(benches);
