// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_snackbar::domain::banner::{AutoHideDuration, TransitionDelay};
use iced_snackbar::snackbar::{
    compute_styles, Banner, BannerOptions, BannerProps, Content, DeviceSize, Timeline,
};
use iced_snackbar::ui::theming::AppTheme;
use std::hint::black_box;
use std::time::Duration;

fn replacement_cycle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_transitions");

    let props = BannerProps::controlled(Content::new("A").with_action("Undo"), true)
        .with_auto_hide(AutoHideDuration::from_millis(4_000));

    group.bench_function("open_replace_close", |b| {
        b.iter(|| {
            let (mut banner, commands) =
                Banner::mount(props.clone(), AppTheme::default(), BannerOptions::default());
            banner.on_resize(Size::new(1024.0, 768.0));
            let mut timeline = Timeline::new();
            timeline.apply(commands);

            for message in ["B", "C", "D"] {
                timeline.apply(banner.set_props(props.clone().with_message(message)));
                timeline.advance(&mut banner, Duration::from_millis(800));
            }
            timeline.apply(banner.set_props(props.clone().with_open(false)));
            black_box(banner.phase())
        });
    });

    group.bench_function("compute_styles", |b| {
        let theme = AppTheme::default();
        b.iter(|| {
            black_box(compute_styles(
                black_box(true),
                DeviceSize::Medium,
                &theme,
                TransitionDelay::default(),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, replacement_cycle_benchmark);
criterion_main!(benches);
