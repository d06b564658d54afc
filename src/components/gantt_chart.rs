//! Gantt Chart Component
//!
//! Task bars placed on the configured window, with a month header and a
//! marker at the current timeline position.

use leptos::prelude::*;

use bim_schedule::{Task, TaskStatus, TimelineWindow};

fn status_class(status: TaskStatus) -> String {
    format!("status-{}", status.label().to_lowercase().replace(' ', "-"))
}

fn percent(fraction: f64) -> String {
    format!("{:.3}%", fraction * 100.0)
}

#[component]
pub fn GanttChart(
    tasks: Vec<Task>,
    window: TimelineWindow,
    /// Timeline position as a fraction of the window
    position: Signal<f64>,
) -> impl IntoView {
    let ticks = window.month_ticks();

    view! {
        <div class="gantt-chart">
            <div class="gantt-title">"Construction Schedule - Gantt Chart"</div>

            <div class="gantt-header">
                <div class="gantt-label-col"></div>
                <div class="gantt-timeline">
                    {ticks.iter().map(|tick| view! {
                        <div
                            class="month-tick"
                            style=format!("left: {}; width: {};", percent(tick.offset), percent(tick.width))
                        >
                            {tick.label.clone()}
                        </div>
                    }).collect_view()}
                </div>
            </div>

            {tasks.into_iter().map(|task| {
                let bar = window.bar(&task);
                let dividers = ticks.iter().skip(1).map(|tick| view! {
                    <div class="month-divider" style=format!("left: {};", percent(tick.offset))></div>
                }).collect_view();
                view! {
                    <div class="gantt-row">
                        <div class="gantt-label-col">
                            <div class="task-name">{task.name.clone()}</div>
                            <span class=format!("status-badge {}", status_class(task.status))>{task.status.label()}</span>
                            <span class="task-duration">{format!("{}d", task.duration)}</span>
                        </div>
                        <div class="gantt-timeline">
                            {dividers}
                            <div
                                class=format!("task-bar {}", status_class(task.status))
                                style=format!("left: {}; width: {};", percent(bar.offset), percent(bar.width))
                            >
                                <div class="task-progress" style=format!("width: {};", percent(bar.progress))></div>
                                <span class="task-bar-label">{format!("{}%", task.progress)}</span>
                            </div>
                            <div class="position-marker" style=move || format!("left: {};", percent(position.get()))></div>
                        </div>
                    </div>
                }
            }).collect_view()}

            <div class="gantt-legend">
                {TaskStatus::ALL.into_iter().map(|status| view! {
                    <div class="legend-item">
                        <span class=format!("legend-swatch {}", status_class(status))></span>
                        <span>{status.label()}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
