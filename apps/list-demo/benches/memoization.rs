use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flatlist_core::InstanceScope;
use flatlist_foundation::FlatListSpec;
use list_demo::app::{build_flat_list, expensive_function, render_item, Record};

fn expensive_derivation(c: &mut Criterion) {
    c.bench_function("expensive_function", |b| {
        b.iter(|| expensive_function(black_box("Item 500")));
    });
}

fn memoized_rerender(c: &mut Criterion) {
    let record = Record::new(500);
    let mut scope = InstanceScope::new();
    scope.begin_pass();
    render_item(&record, &mut scope);
    scope.end_pass();

    c.bench_function("render_item_memoized", |b| {
        b.iter(|| {
            scope.begin_pass();
            let node = render_item(black_box(&record), &mut scope);
            scope.end_pass();
            node
        });
    });
}

fn scroll_frames(c: &mut Criterion) {
    let mut list = build_flat_list(FlatListSpec::default());
    list.frame(640.0);

    c.bench_function("scroll_frame", |b| {
        let mut direction = 1.0;
        b.iter(|| {
            if !list.state().can_scroll_forward() {
                direction = -1.0;
            } else if !list.state().can_scroll_backward() {
                direction = 1.0;
            }
            list.scroll_by(direction * 310.0);
            list.frame(640.0)
        });
    });
}

criterion_group!(benches, expensive_derivation, memoized_rerender, scroll_frames);
criterion_main!(benches);
