//! 4D Time Detail Page
//!
//! Timeline controls, schedule statistics and the Gantt chart.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use bim_schedule::{ScheduleStats, TimelineState, TimelineWindow};

use crate::components::{GanttChart, PageHeader};
use crate::store::{use_app_store, DashboardStateStoreFields};

/// Advance the slider on a timer until playback stops.
/// A newer loop (pause then play again) retires older ones.
fn start_play_loop(timeline: RwSignal<TimelineState>, generation: RwSignal<u32>, interval_ms: u32) {
    generation.update(|g| *g += 1);
    let current = generation.get_untracked();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if generation.try_get_untracked() != Some(current) {
                break;
            }
            match timeline.try_update(|t| t.tick()) {
                Some(true) => {}
                _ => break,
            }
        }
        web_sys::console::log_1(&"[APP] Play loop finished".into());
    });
}

#[component]
fn TimelineControls(
    timeline: RwSignal<TimelineState>,
    window: TimelineWindow,
    interval_ms: u32,
) -> impl IntoView {
    let generation = RwSignal::new(0u32);

    let on_toggle_play = move |_: web_sys::MouseEvent| {
        if timeline.try_update(|t| t.toggle_play()) == Some(true) {
            start_play_loop(timeline, generation, interval_ms);
        }
    };

    let on_slide = move |ev: web_sys::Event| {
        if let Ok(position) = event_target_value(&ev).parse::<u8>() {
            timeline.update(|t| t.set_position(position));
        }
    };

    let range = format!(
        "{} - {}",
        window.start().format("%b %Y"),
        window.end().format("%b %Y")
    );

    view! {
        <div class="timeline-controls">
            <button class="step-btn" on:click=move |_| timeline.update(|t| t.step_back())>"⏮"</button>
            <button class="play-btn" on:click=on_toggle_play>
                {move || if timeline.get().is_playing() { "⏸" } else { "▶" }}
            </button>
            <button class="step-btn" on:click=move |_| timeline.update(|t| t.step_forward())>"⏭"</button>
            <input
                class="timeline-slider"
                type="range"
                min="0"
                max=TimelineState::MAX.to_string()
                step="1"
                prop:value=move || timeline.get().position().to_string()
                on:input=on_slide
            />
            <span class="timeline-position">{move || format!("{}% Complete", timeline.get().position())}</span>
            <span class="timeline-date">
                {move || window.date_at(timeline.get().fraction()).format("%b %d, %Y").to_string()}
            </span>
            <span class="timeline-range">{range}</span>
        </div>
    }
}

#[component]
fn StatsRow(stats: ScheduleStats) -> impl IntoView {
    let cards = [
        ("Total Tasks", stats.total.to_string()),
        ("Completed", stats.completed.to_string()),
        ("In Progress", stats.in_progress.to_string()),
        ("Overall Progress", format!("{}%", stats.overall_progress)),
    ];
    view! {
        <div class="stats-grid">
            {cards.into_iter().map(|(label, value)| view! {
                <div class="stat-card">
                    <div class="stat-label">{label}</div>
                    <div class="stat-value">{value}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn TimeDetailPage(schedule_id: String) -> impl IntoView {
    let store = use_app_store();
    let config = store.config().get_untracked();
    let tasks = store.snapshot().read_untracked().tasks.clone();

    let (title, subtitle) = store
        .snapshot()
        .read_untracked()
        .schedules
        .find(&schedule_id)
        .map(|s| (s.name.clone(), format!("{} · {}", s.project, s.kind.label())))
        .unwrap_or_else(|_| (schedule_id.clone(), String::from("4D")));

    let window = match config.timeline_window() {
        Ok(window) => window,
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] Timeline config error: {}", e).into());
            return view! {
                <div class="time-detail-page">
                    <PageHeader title=title subtitle=subtitle />
                    <div class="load-error">{format!("Invalid timeline window: {}", e)}</div>
                </div>
            }.into_any();
        }
    };

    let timeline = RwSignal::new(TimelineState::new(&config.timeline));
    let position = Signal::derive(move || timeline.get().fraction());
    let stats = ScheduleStats::from_tasks(&tasks);

    view! {
        <div class="time-detail-page">
            <PageHeader title=title subtitle=subtitle />
            <TimelineControls timeline=timeline window=window interval_ms=config.timeline.play_interval_ms />
            <StatsRow stats=stats />
            <GanttChart tasks=tasks window=window position=position />
        </div>
    }.into_any()
}
