pub mod diagnostics;
pub mod layout;
pub mod mean;
pub mod scale;
pub mod series;
pub mod tokens;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticCategory, Diagnostics};
pub use layout::{BarSlot, ChartLayout, EmScale, LayoutUnits, MeanMarkerLayout, equilateral_width};
pub use mean::MeanIndicator;
pub use scale::ScaleContext;
pub use series::{PointSeries, validate_points};
pub use tokens::{ChartSpec, parse_number, split_list};
pub use types::{CanvasSize, ChartMode};
