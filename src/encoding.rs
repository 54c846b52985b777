use thiserror::Error;

use crate::data::model::{CourseSummary, CourseTable, Membership};

// ---------------------------------------------------------------------------
// Parameter vocabulary
// ---------------------------------------------------------------------------

/// The four numeric aggregate columns a user can put on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisParam {
    AvgDifficulty,
    AvgRating,
    AvgWorkload,
    ReviewCount,
}

impl AxisParam {
    pub const ALL: [AxisParam; 4] = [
        AxisParam::AvgDifficulty,
        AxisParam::AvgRating,
        AxisParam::AvgWorkload,
        AxisParam::ReviewCount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AxisParam::AvgDifficulty => "Avg. Difficulty",
            AxisParam::AvgRating => "Avg. Rating",
            AxisParam::AvgWorkload => "Avg. Workload (Hrs)",
            AxisParam::ReviewCount => "No. of Reviews",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| EncodingError::InvalidParameter(label.to_string()))
    }
}

/// Size channel: any axis parameter or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeParam {
    Metric(AxisParam),
    None,
}

impl SizeParam {
    pub const ALL: [SizeParam; 5] = [
        SizeParam::Metric(AxisParam::AvgDifficulty),
        SizeParam::Metric(AxisParam::AvgRating),
        SizeParam::Metric(AxisParam::AvgWorkload),
        SizeParam::Metric(AxisParam::ReviewCount),
        SizeParam::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SizeParam::Metric(p) => p.label(),
            SizeParam::None => "None",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        if label == "None" {
            return Ok(SizeParam::None);
        }
        AxisParam::from_label(label).map(SizeParam::Metric)
    }
}

/// Color channel: two continuous metrics, the categorical Specialization
/// pseudo-column, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParam {
    ReviewCount,
    AvgWorkload,
    Specialization,
    None,
}

impl ColorParam {
    pub const ALL: [ColorParam; 4] = [
        ColorParam::ReviewCount,
        ColorParam::AvgWorkload,
        ColorParam::Specialization,
        ColorParam::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorParam::ReviewCount => "No. of Reviews",
            ColorParam::AvgWorkload => "Avg. Workload (Hrs)",
            ColorParam::Specialization => "Specialization",
            ColorParam::None => "None",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| EncodingError::InvalidParameter(label.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Resolved column references
// ---------------------------------------------------------------------------

/// A concrete CourseSummary column a visual channel is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRef {
    AvgDifficulty,
    AvgRating,
    AvgWorkload,
    ReviewCount,
    /// Membership column for one specialization key — categorical.
    Membership(String),
}

impl ColumnRef {
    /// Numeric cell value, for position/size/continuous-color channels.
    /// `None` for missing metrics and for membership columns.
    pub fn numeric(&self, row: &CourseSummary) -> Option<f64> {
        match self {
            ColumnRef::AvgDifficulty => row.avg_difficulty,
            ColumnRef::AvgRating => row.avg_rating,
            ColumnRef::AvgWorkload => row.avg_workload,
            ColumnRef::ReviewCount => Some(f64::from(row.review_count)),
            ColumnRef::Membership(_) => None,
        }
    }

    /// Categorical cell value; only membership columns have one.
    pub fn categorical(&self, row: &CourseSummary) -> Option<Membership> {
        match self {
            ColumnRef::Membership(key) => Some(row.membership_in(key)),
            _ => None,
        }
    }

    fn from_axis(param: AxisParam) -> Self {
        match param {
            AxisParam::AvgDifficulty => ColumnRef::AvgDifficulty,
            AxisParam::AvgRating => ColumnRef::AvgRating,
            AxisParam::AvgWorkload => ColumnRef::AvgWorkload,
            AxisParam::ReviewCount => ColumnRef::ReviewCount,
        }
    }
}

// ---------------------------------------------------------------------------
// EncodingSpec – what the renderer consumes
// ---------------------------------------------------------------------------

/// Fully resolved plot encodings, rebuilt per render.
///
/// Difficulty and rating live on a 1–5 scale with 3 as neutral, so whichever
/// axis carries one of them gets a reference line at 3 and a [1, 5] display
/// clamp — applied independently and identically to x and y.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingSpec {
    pub x: ColumnRef,
    pub y: ColumnRef,
    pub size: Option<ColumnRef>,
    pub color: Option<ColumnRef>,
    pub color_is_categorical: bool,
    pub x_reference: Option<f64>,
    pub y_reference: Option<f64>,
    pub x_clamp: Option<(f64, f64)>,
    pub y_clamp: Option<(f64, f64)>,
}

impl EncodingSpec {
    pub fn x_label(&self) -> &'static str {
        axis_label(&self.x)
    }

    pub fn y_label(&self) -> &'static str {
        axis_label(&self.y)
    }
}

fn axis_label(col: &ColumnRef) -> &'static str {
    match col {
        ColumnRef::AvgDifficulty => "Avg. Difficulty",
        ColumnRef::AvgRating => "Avg. Rating",
        ColumnRef::AvgWorkload => "Avg. Workload (Hrs)",
        ColumnRef::ReviewCount => "No. of Reviews",
        ColumnRef::Membership(_) => "Specialization",
    }
}

/// Reference line / clamp decoration for a 1–5 scale column.
fn scale_decoration(col: &ColumnRef) -> (Option<f64>, Option<(f64, f64)>) {
    match col {
        ColumnRef::AvgDifficulty | ColumnRef::AvgRating => (Some(3.0), Some((1.0, 5.0))),
        _ => (None, None),
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum EncodingError {
    /// Selection outside the fixed vocabulary — rejected before rendering.
    #[error("unknown display parameter: {0:?}")]
    InvalidParameter(String),
    /// color = Specialization without the secondary specialization choice.
    #[error("color by specialization requires a specialization selection")]
    MissingSpecChoice,
    /// The secondary choice names a specialization the table does not carry.
    #[error("unknown specialization: {0:?}")]
    UnknownSpecialization(String),
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve user selections into an [`EncodingSpec`].
///
/// `spec_choice` is consulted only when `color` is
/// [`ColorParam::Specialization`]; it must name a key present in the table.
pub fn resolve(
    x: AxisParam,
    y: AxisParam,
    size: SizeParam,
    color: ColorParam,
    spec_choice: Option<&str>,
    table: &CourseTable,
) -> Result<EncodingSpec, EncodingError> {
    let x = ColumnRef::from_axis(x);
    let y = ColumnRef::from_axis(y);

    let size = match size {
        SizeParam::Metric(p) => Some(ColumnRef::from_axis(p)),
        SizeParam::None => None,
    };

    let (color, color_is_categorical) = match color {
        ColorParam::ReviewCount => (Some(ColumnRef::ReviewCount), false),
        ColorParam::AvgWorkload => (Some(ColumnRef::AvgWorkload), false),
        ColorParam::None => (None, false),
        ColorParam::Specialization => {
            let key = spec_choice.ok_or(EncodingError::MissingSpecChoice)?;
            if !table.spec_keys.iter().any(|k| k == key) {
                return Err(EncodingError::UnknownSpecialization(key.to_string()));
            }
            (Some(ColumnRef::Membership(key.to_string())), true)
        }
    };

    let (x_reference, x_clamp) = scale_decoration(&x);
    let (y_reference, y_clamp) = scale_decoration(&y);

    Ok(EncodingSpec {
        x,
        y,
        size,
        color,
        color_is_categorical,
        x_reference,
        y_reference,
        x_clamp,
        y_clamp,
    })
}
