use iced::{
    mouse,
    widget::{
        button,
        canvas::{self, path::Arc, Canvas, Frame, Geometry, Path, Stroke},
        column, pick_list, row, scrollable, slider, text, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Radians, Rectangle, Renderer, Task, Theme,
};
use launchcore::chart::{ChartSpec, ScatterPoint, Slice};
use launchcore::dashboard::SiteOption;
use launchcore::dataset::Dataset;
use launchcore::filter::PayloadRange;
use launchcore::{derive_charts, ChartPair, DashboardLayout, SelectionState};
use std::{f32::consts::PI, path::PathBuf};

const DATASET_ENV: &str = "LAUNCH_DATASET";
const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> iced::Result {
    iced::application(Dashboard::boot, Dashboard::update, Dashboard::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Dashboard) -> String {
    launchcore::dashboard::layout::DASHBOARD_HEADING.into()
}

fn application_theme(_: &Dashboard) -> Theme {
    Theme::Dark
}

fn dataset_path() -> PathBuf {
    std::env::var_os(DATASET_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
}

fn palette_color(index: usize) -> Color {
    match index % 6 {
        0 => Color::from_rgb(0.18, 0.72, 0.89),
        1 => Color::from_rgb(0.95, 0.55, 0.2),
        2 => Color::from_rgb(0.42, 0.8, 0.38),
        3 => Color::from_rgb(0.86, 0.33, 0.46),
        4 => Color::from_rgb(0.66, 0.52, 0.92),
        _ => Color::from_rgb(0.93, 0.82, 0.3),
    }
}

#[derive(Debug)]
struct Dashboard {
    dataset: Option<Dataset>,
    layout: Option<DashboardLayout>,
    selection: SelectionState,
    charts: Option<ChartPair>,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    DatasetLoaded(Result<Dataset, String>),
    SiteSelected(SiteOption),
    PayloadLowChanged(f64),
    PayloadHighChanged(f64),
    ResetSelection,
}

impl Dashboard {
    fn boot() -> (Self, Task<Message>) {
        let path = dataset_path();
        (
            Dashboard {
                dataset: None,
                layout: None,
                selection: SelectionState::default(),
                charts: None,
                status: format!("Loading {}...", path.display()),
                history: Vec::new(),
            },
            Task::perform(load_dataset(path), Message::DatasetLoaded),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::DatasetLoaded(Ok(dataset)) => {
                state.status = format!("{} launches loaded", dataset.len());
                state.push_history(state.status.clone());
                state.layout = Some(DashboardLayout::for_dataset(&dataset));
                state.dataset = Some(dataset);
                state.refresh();
            }
            Message::DatasetLoaded(Err(err)) => {
                state.status = format!("Dataset error: {err}");
                state.push_history(state.status.clone());
            }
            Message::SiteSelected(option) => {
                state.selection.site = option.selection();
                state.refresh();
            }
            Message::PayloadLowChanged(value) => {
                state.selection.payload_range = with_low(state.selection.payload_range, value);
                state.refresh();
            }
            Message::PayloadHighChanged(value) => {
                state.selection.payload_range = with_high(state.selection.payload_range, value);
                state.refresh();
            }
            Message::ResetSelection => {
                state.selection = SelectionState::default();
                state.refresh();
            }
        }
        Task::none()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let options = state
            .layout
            .as_ref()
            .map(|layout| layout.site_options.clone())
            .unwrap_or_default();
        let selected = state
            .layout
            .as_ref()
            .and_then(|layout| layout.option_for(&state.selection.site))
            .cloned();
        let range = state.selection.payload_range;

        let controls = column![
            text("Launch site").size(18),
            pick_list(options, selected, Message::SiteSelected)
                .placeholder("Select a Launch Site")
                .padding(6),
            text(format!("Payload range: {:.0} - {:.0} kg", range.low, range.high)).size(18),
            text("From").size(12),
            slider(
                PayloadRange::MIN_KG..=PayloadRange::MAX_KG,
                range.low,
                Message::PayloadLowChanged
            )
            .step(PayloadRange::STEP_KG),
            text("To").size(12),
            slider(
                PayloadRange::MIN_KG..=PayloadRange::MAX_KG,
                range.high,
                Message::PayloadHighChanged
            )
            .step(PayloadRange::STEP_KG),
            text(
                PayloadRange::MARKS_KG
                    .iter()
                    .map(|mark| format!("{mark:.0}"))
                    .collect::<Vec<_>>()
                    .join("   ")
            )
            .size(12),
            button("Reset selection")
                .on_press(Message::ResetSelection)
                .padding(10),
            text(&state.status).size(14),
            text("Activity log").size(16),
            Container::new(scrollable(history_list(&state.history)).height(Length::Fixed(160.0)))
                .padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(340.0));

        let charts = match &state.charts {
            Some(charts) => column![
                proportion_panel(&charts.proportion),
                scatter_panel(&charts.scatter)
            ]
            .spacing(20),
            None => column![text("No dataset loaded").size(18)],
        };

        let layout = row![
            controls,
            column![text(application_title(state)).size(30), charts]
                .spacing(16)
                .padding(16)
                .width(Length::Fill)
        ]
        .spacing(20)
        .align_y(Alignment::Start)
        .padding(20);

        Container::new(scrollable(layout))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Re-derives both charts for the current selection.
    fn refresh(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let charts = derive_charts(&self.selection, dataset);
        self.push_history(format!(
            "{} [{:.0}, {:.0}] -> {} slices / {} points",
            self.selection.site,
            self.selection.payload_range.low,
            self.selection.payload_range.high,
            charts.proportion.len(),
            charts.scatter.len()
        ));
        self.charts = Some(charts);
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

/// Moves the lower handle, dragging the upper one along so `low <= high`.
fn with_low(range: PayloadRange, value: f64) -> PayloadRange {
    let low = PayloadRange::snap(value);
    PayloadRange::new(low, range.high.max(low))
}

/// Moves the upper handle, dragging the lower one along so `low <= high`.
fn with_high(range: PayloadRange, value: f64) -> PayloadRange {
    let high = PayloadRange::snap(value);
    PayloadRange::new(range.low.min(high), high)
}

async fn load_dataset(path: PathBuf) -> Result<Dataset, String> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| format!("{}: {e}", path.display()))?;
    Dataset::from_csv_str(&contents).map_err(|e| format!("{}: {e}", path.display()))
}

fn history_list(history: &[String]) -> Column<'_, Message> {
    if history.is_empty() {
        Column::new().push(text("No activity yet").size(12))
    } else {
        history
            .iter()
            .rev()
            .fold(Column::new().spacing(4), |col, entry| {
                col.push(text(entry.as_str()).size(12))
            })
    }
}

fn proportion_panel(chart: &ChartSpec) -> Element<'_, Message> {
    let slices = chart.slices().to_vec();
    let legend = if slices.is_empty() {
        Column::new().push(text("No launches for this selection").size(12))
    } else {
        slices
            .iter()
            .enumerate()
            .fold(Column::new().spacing(4), |col, (idx, slice)| {
                col.push(
                    text(format!(
                        "{}: {:.0} ({:.1}%)",
                        slice.label,
                        slice.value,
                        slice.fraction * 100.0
                    ))
                    .size(14)
                    .color(palette_color(idx)),
                )
            })
    };

    column![
        text(chart.title.as_str()).size(20),
        row![
            Canvas::new(PieChart { slices })
                .width(Length::Fixed(260.0))
                .height(Length::Fixed(260.0)),
            legend
        ]
        .spacing(20)
        .align_y(Alignment::Center),
    ]
    .spacing(8)
    .into()
}

fn scatter_panel(chart: &ChartSpec) -> Element<'_, Message> {
    let plot = ScatterPlot::new(chart.points());
    let legend = plot
        .categories
        .iter()
        .enumerate()
        .fold(row![text("Booster:").size(12)].spacing(12), |r, (idx, category)| {
            r.push(text(category.clone()).size(12).color(palette_color(idx)))
        });

    column![
        text(chart.title.as_str()).size(20),
        legend,
        Canvas::new(plot)
            .width(Length::Fill)
            .height(Length::Fixed(260.0)),
        text("x: Payload Mass (kg), 0 to 10000   y: class (0 = failure, 1 = success)").size(12),
    ]
    .spacing(8)
    .into()
}

#[derive(Clone)]
struct PieChart {
    slices: Vec<Slice>,
}

impl canvas::Program<Message> for PieChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - 8.0;

        let outline = Path::circle(center, radius);
        frame.stroke(
            &outline,
            Stroke::default().with_color(Color::from_rgb(0.25, 0.25, 0.3)),
        );

        let mut start = -PI / 2.0;
        for (idx, slice) in self.slices.iter().enumerate() {
            if slice.fraction <= 0.0 {
                continue;
            }
            let sweep = slice.fraction as f32 * 2.0 * PI;
            let wedge = Path::new(|builder| {
                builder.move_to(center);
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + sweep),
                });
                builder.close();
            });
            frame.fill(&wedge, palette_color(idx));
            start += sweep;
        }

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
struct ScatterPlot {
    points: Vec<ScatterPoint>,
    categories: Vec<String>,
}

impl ScatterPlot {
    fn new(points: &[ScatterPoint]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for point in points {
            if !categories.contains(&point.booster_version_category) {
                categories.push(point.booster_version_category.clone());
            }
        }
        Self {
            points: points.to_vec(),
            categories,
        }
    }

    fn category_index(&self, category: &str) -> usize {
        self.categories
            .iter()
            .position(|known| known == category)
            .unwrap_or(0)
    }
}

impl canvas::Program<Message> for ScatterPlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let margin = 24.0;
        let width = (bounds.width - 2.0 * margin).max(1.0);
        let failure_y = bounds.height - margin * 2.0;
        let success_y = margin * 2.0;

        let axes = Path::new(|builder| {
            for y in [failure_y, success_y] {
                builder.move_to(Point::new(margin, y));
                builder.line_to(Point::new(margin + width, y));
            }
            for mark in PayloadRange::MARKS_KG {
                let x = margin + (mark / PayloadRange::MAX_KG) as f32 * width;
                builder.move_to(Point::new(x, success_y - 8.0));
                builder.line_to(Point::new(x, failure_y + 8.0));
            }
        });
        frame.stroke(
            &axes,
            Stroke::default()
                .with_color(Color::from_rgb(0.25, 0.25, 0.3))
                .with_width(1.0),
        );

        for point in &self.points {
            let normalized = (point.payload_mass_kg / PayloadRange::MAX_KG).clamp(0.0, 1.0) as f32;
            let x = margin + normalized * width;
            let y = if point.outcome.is_success() {
                success_y
            } else {
                failure_y
            };
            let marker = Path::circle(Point::new(x, y), 5.0);
            frame.fill(
                &marker,
                palette_color(self.category_index(&point.booster_version_category)),
            );
        }

        vec![frame.into_geometry()]
    }
}
