//! Bar-chart recording of algorithm runs.
//!
//! [`ChartObserver`] turns every event into a [`Frame`]: a titled list of
//! bars, each tagged with a [`Tone`] saying what role it plays in the step.
//! Frames are plain data, so they can be inspected in tests or replayed.
//! With the `plot` feature, [`ChartObserver::show`] opens an egui window with
//! a slider for stepping through the frames.

use algoviz_algorithms::{
    dynamic::knapsack,
    graph::dijkstra,
    searching::binary,
    sorting::bubble,
};
use algoviz_core::Observer;

use crate::traits::StepLabel;

/// The role of a bar within a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Not involved in this step.
    Plain,
    /// Part of the working set (compared pair, search range, current row).
    Highlight,
    /// The element the step is about (probe, current node, filled cell).
    Focus,
    /// Already settled (a finalized node).
    Visited,
}

/// A single bar of a [`Frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Text shown for the bar (the element, node or capacity).
    pub label: String,

    /// Bar height.
    pub value: f64,

    /// Role of the bar in the step.
    pub tone: Tone,
}

/// One recorded step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The step's label, e.g. `Comparing 3 and 1`.
    pub title: String,

    /// Bars in display order.
    pub bars: Vec<Bar>,
}

/// A numeric element that can be drawn as a bar.
pub trait BarValue {
    /// Returns the bar height.
    fn bar_value(&self) -> f64;
}

macro_rules! impl_bar_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BarValue for $ty {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn bar_value(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_bar_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// An event that can be drawn as a [`Frame`].
pub trait Chartable {
    /// Returns the bars for this event, in display order.
    fn bars(&self) -> Vec<Bar>;
}

impl<T: BarValue + ToString> Chartable for bubble::Event<'_, T> {
    fn bars(&self) -> Vec<Bar> {
        let focus = if self.swapped { Tone::Focus } else { Tone::Highlight };
        sequence_bars(self.sequence, |i| {
            if i == self.left || i == self.right {
                focus
            } else {
                Tone::Plain
            }
        })
    }
}

impl<T: BarValue + ToString> Chartable for binary::Event<'_, T> {
    fn bars(&self) -> Vec<Bar> {
        let range = self.range();
        sequence_bars(self.sequence, |i| {
            if i == self.mid {
                Tone::Focus
            } else if range.contains(&i) {
                Tone::Highlight
            } else {
                Tone::Plain
            }
        })
    }
}

impl Chartable for dijkstra::Event {
    /// One bar per node, as high as its tentative distance. Unreachable
    /// nodes get a zero-height bar.
    fn bars(&self) -> Vec<Bar> {
        self.distances
            .iter()
            .map(|(node, distance)| {
                let tone = if node == self.current {
                    Tone::Focus
                } else if self.is_visited(node) {
                    Tone::Visited
                } else {
                    Tone::Plain
                };
                Bar {
                    label: format!("{node} ({distance})"),
                    value: distance.finite().map_or(0.0, |length| length.bar_value()),
                    tone,
                }
            })
            .collect()
    }
}

impl Chartable for knapsack::Event {
    /// The row being filled, one bar per capacity.
    fn bars(&self) -> Vec<Bar> {
        self.table.rows()[self.item]
            .iter()
            .enumerate()
            .map(|(w, value)| Bar {
                label: format!("w={w}"),
                value: value.bar_value(),
                tone: match w.cmp(&self.capacity) {
                    std::cmp::Ordering::Less => Tone::Highlight,
                    std::cmp::Ordering::Equal => Tone::Focus,
                    std::cmp::Ordering::Greater => Tone::Plain,
                },
            })
            .collect()
    }
}

fn sequence_bars<T: BarValue + ToString>(items: &[T], tone: impl Fn(usize) -> Tone) -> Vec<Bar> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Bar {
            label: item.to_string(),
            value: item.bar_value(),
            tone: tone(i),
        })
        .collect()
}

/// An observer that records one [`Frame`] per event.
///
/// Never returns an action.
#[derive(Debug, Default)]
pub struct ChartObserver {
    frames: Vec<Frame>,
}

impl ChartObserver {
    /// Creates an observer with no frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the frames recorded so far, one per event.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Consumes the observer and returns its frames.
    #[must_use]
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    fn record<E: Chartable + StepLabel>(&mut self, event: &E) {
        self.frames.push(Frame {
            title: event.label(),
            bars: event.bars(),
        });
    }
}

impl<E, A> Observer<E, A> for ChartObserver
where
    E: Chartable + StepLabel,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut ChartObserver` to be passed to algorithms that take an
/// observer by value, so [`ChartObserver::show`] can be called afterwards.
impl<E, A> Observer<E, A> for &mut ChartObserver
where
    E: Chartable + StepLabel,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).record(event);
        None
    }
}

#[cfg(feature = "plot")]
mod window {
    use eframe::egui::{self, Color32};
    use egui_plot::{Bar as PlotBar, BarChart, Plot};

    use super::{ChartObserver, Frame, Tone};

    impl ChartObserver {
        /// Opens a blocking egui window for stepping through the frames.
        ///
        /// Blocks until the window is closed by the user.
        ///
        /// # Errors
        ///
        /// Returns an error if the native window cannot be created.
        pub fn show(self, title: &str) -> Result<(), eframe::Error> {
            let frames = self.frames;
            eframe::run_native(
                title,
                eframe::NativeOptions::default(),
                Box::new(move |_cc| Ok(Box::new(ChartApp { frames, current: 0 }))),
            )
        }
    }

    fn color(tone: Tone) -> Color32 {
        match tone {
            Tone::Plain => Color32::from_rgb(150, 150, 150),
            Tone::Highlight => Color32::from_rgb(230, 190, 60),
            Tone::Focus => Color32::from_rgb(220, 70, 70),
            Tone::Visited => Color32::from_rgb(80, 180, 100),
        }
    }

    /// The egui [`eframe::App`] that renders recorded frames.
    struct ChartApp {
        frames: Vec<Frame>,
        current: usize,
    }

    impl eframe::App for ChartApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            let last = self.frames.len().saturating_sub(1);

            egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        self.current = self.current.saturating_sub(1);
                    }
                    ui.add(egui::Slider::new(&mut self.current, 0..=last).text("step"));
                    if ui.button("▶").clicked() && self.current < last {
                        self.current += 1;
                    }
                });
            });

            egui::CentralPanel::default().show(ctx, |ui| {
                let Some(frame) = self.frames.get(self.current) else {
                    ui.label("No steps were recorded.");
                    return;
                };
                ui.heading(&frame.title);

                #[allow(clippy::cast_precision_loss)]
                let bars: Vec<PlotBar> = frame
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(i, bar)| {
                        PlotBar::new(i as f64, bar.value)
                            .name(&bar.label)
                            .fill(color(bar.tone))
                    })
                    .collect();

                Plot::new("chart_observer").show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(bars));
                });
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn tones(frame: &Frame) -> Vec<Tone> {
        frame.bars.iter().map(|bar| bar.tone).collect()
    }

    #[test]
    fn records_a_frame_per_bubble_comparison() {
        let mut chart = ChartObserver::new();
        bubble::sort(&mut [3, 1, 2], &mut chart);

        let frames = chart.into_frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].title, "Comparing 3 and 1");
        assert_eq!(tones(&frames[0]), [Tone::Focus, Tone::Focus, Tone::Plain]);
        assert_eq!(frames[0].bars[0].label, "1");
        assert_relative_eq!(frames[0].bars[1].value, 3.0);
    }

    #[test]
    fn binary_frames_mark_range_and_midpoint() {
        let mut chart = ChartObserver::new();
        binary::search(&[10, 20, 30, 40, 50], &40, &mut chart);

        let second = &chart.frames()[1];
        assert_eq!(
            tones(second),
            [Tone::Plain, Tone::Plain, Tone::Plain, Tone::Focus, Tone::Highlight]
        );
        assert_relative_eq!(second.bars[3].value, 40.0);
    }

    #[test]
    fn dijkstra_frames_show_distances() {
        let graph = "A:B,3 B: C:".parse().expect("valid graph");
        let mut chart = ChartObserver::new();
        dijkstra::solve(&graph, "A", &mut chart);

        let last = chart.frames().last().expect("frames");
        assert_eq!(last.title, "Current node: B");
        assert_eq!(tones(last), [Tone::Visited, Tone::Focus, Tone::Plain]);
        assert_relative_eq!(last.bars[1].value, 3.0);
        assert_eq!(last.bars[2].label, "C (∞)");
        assert_relative_eq!(last.bars[2].value, 0.0);
    }

    #[test]
    fn knapsack_frames_show_the_current_row() {
        let mut chart = ChartObserver::new();
        knapsack::solve(&[1], &[7], 2, &mut chart);

        let frames = chart.frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(
            tones(&frames[1]),
            [Tone::Highlight, Tone::Focus, Tone::Plain]
        );
        assert_relative_eq!(frames[2].bars[2].value, 7.0);
    }
}
