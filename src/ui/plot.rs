use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Legend, LineStyle, MarkerShape, Plot, Points, VLine};

use crate::color::{membership_color, Gradient, DEFAULT_POINT_COLOR};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Course scatter plot (central panel)
// ---------------------------------------------------------------------------

const MIN_RADIUS: f32 = 2.5;
const MAX_RADIUS: f32 = 14.0;

/// Render the course scatter in the central panel.
pub fn course_plot(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Fetch reviews or open a snapshot to get started");
            });
            return;
        }
    };

    let encoding = match state.resolve_encoding() {
        Ok(e) => e,
        Err(err) => {
            // The sidebar only offers vocabulary values, so this is a
            // stale-selection state; surface it instead of rendering.
            ui.colored_label(Color32::RED, err.to_string());
            return;
        }
    };

    // Largest size-column value among visible rows, for radius scaling.
    let size_max = encoding.size.as_ref().map(|col| {
        state
            .visible_indices
            .iter()
            .filter_map(|&i| col.numeric(&table.rows[i]))
            .fold(0.0_f64, f64::max)
    });

    // Continuous colour scale fitted to the visible rows.
    let gradient = match (&encoding.color, encoding.color_is_categorical) {
        (Some(col), false) => Some(Gradient::fit(
            state
                .visible_indices
                .iter()
                .map(|&i| col.numeric(&table.rows[i])),
        )),
        _ => None,
    };

    let mut plot = Plot::new("course_plot")
        .x_axis_label(encoding.x_label())
        .y_axis_label(encoding.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    // Categorical colour gets an In-Spec / Out-of-Spec legend; a continuous
    // scale would flood it with one entry per course.
    if encoding.color_is_categorical {
        plot = plot.legend(Legend::default());
    }

    // 1–5 scale metrics keep their full range in view on either axis.
    if let Some((lo, hi)) = encoding.x_clamp {
        plot = plot.include_x(lo).include_x(hi);
    }
    if let Some((lo, hi)) = encoding.y_clamp {
        plot = plot.include_y(lo).include_y(hi);
    }

    plot.show(ui, |plot_ui| {
        if let Some(v) = encoding.x_reference {
            plot_ui.vline(
                VLine::new(v)
                    .style(LineStyle::dashed_loose())
                    .color(Color32::WHITE),
            );
        }
        if let Some(v) = encoding.y_reference {
            plot_ui.hline(
                HLine::new(v)
                    .style(LineStyle::dashed_loose())
                    .color(Color32::WHITE),
            );
        }

        for &idx in &state.visible_indices {
            let row = &table.rows[idx];

            // A course with no value on a positional axis cannot be placed.
            let (Some(x), Some(y)) = (encoding.x.numeric(row), encoding.y.numeric(row)) else {
                continue;
            };

            let radius = match (&encoding.size, size_max) {
                (Some(col), Some(max)) if max > 0.0 => {
                    let value = col.numeric(row).unwrap_or(0.0);
                    MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * (value / max) as f32
                }
                _ => 4.0,
            };

            let (color, name) = match &encoding.color {
                Some(col) if encoding.color_is_categorical => {
                    let flag = col
                        .categorical(row)
                        .unwrap_or(crate::data::model::Membership::OutOfSpec);
                    (membership_color(flag), flag.to_string())
                }
                Some(col) => {
                    let color = col
                        .numeric(row)
                        .zip(gradient)
                        .map(|(v, g)| g.color_for(v))
                        .unwrap_or(DEFAULT_POINT_COLOR);
                    (color, row.course_name.clone())
                }
                None => (DEFAULT_POINT_COLOR, row.course_name.clone()),
            };

            let points = Points::new(vec![[x, y]])
                .shape(MarkerShape::Circle)
                .radius(radius)
                .color(color)
                .name(name);

            plot_ui.points(points);
        }
    });
}
