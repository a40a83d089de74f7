use std::path::Path;

use crate::figure::{Axes, Figure, Legend, LegendEntry, Text, Trace, TraceKind};

/// 입력 표 읽기에서 발생 가능한 오류.
#[derive(Debug)]
pub enum TableError {
    /// CSV 읽기/파일 오류
    Csv(csv::Error),
    /// 열이 3개 미만
    TooFewColumns { found: usize },
    /// 숫자로 해석할 수 없는 칸 (1 기반 데이터 행/열)
    BadNumber { row: usize, column: usize },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Csv(e) => write!(f, "CSV 읽기 오류: {e}"),
            TableError::TooFewColumns { found } => {
                write!(f, "열이 부족합니다: 3열(응력, 축변형률, 간극비) 필요, {found}열 발견")
            }
            TableError::BadNumber { row, column } => {
                write!(f, "숫자가 아닌 값 (행 {row}, 열 {column})")
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<csv::Error> for TableError {
    fn from(value: csv::Error) -> Self {
        TableError::Csv(value)
    }
}

/// 업로드된 표의 앞 3열. 열 순서는 [응력, 축변형률, 간극비]로 고정이며
/// 응력 단위는 파일과 무관하게 사용자가 선택한다.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub stress: Vec<f64>,
    pub strain: Vec<f64>,
    pub void_ratio: Vec<f64>,
}

/// CSV 파일을 읽는다. 첫 행은 헤더로 소비하고, 각 데이터 행의 앞 3열만
/// 사용한다. 열 개수 외의 구조 검증은 하지 않는다.
pub fn load_csv(path: &Path) -> Result<RawTable, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut stress = Vec::new();
    let mut strain = Vec::new();
    let mut void_ratio = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 3 {
            return Err(TableError::TooFewColumns {
                found: record.len(),
            });
        }
        let mut parsed = [0.0f64; 3];
        for (column, field) in record.iter().take(3).enumerate() {
            parsed[column] = field.parse::<f64>().map_err(|_| TableError::BadNumber {
                row: index + 1,
                column: column + 1,
            })?;
        }
        stress.push(parsed[0]);
        strain.push(parsed[1]);
        void_ratio.push(parsed[2]);
    }
    Ok(RawTable {
        stress,
        strain,
        void_ratio,
    })
}

/// 압밀시험 1회분의 분석 입력. 응력과 현장 유효 수직응력은 생성 전에
/// kPa로 정규화되어 들어온다. 축변형률/간극비 열은 변환 없이 그대로다.
#[derive(Debug, Clone, PartialEq)]
pub struct OedometerData {
    stress_kpa: Vec<f64>,
    strain: Vec<f64>,
    void_ratio: Vec<f64>,
    sigma_v_kpa: f64,
}

impl OedometerData {
    /// 정규화된 3열과 kPa 기준 현장 응력으로 분석 입력을 만든다.
    pub fn new(stress_kpa: Vec<f64>, strain: Vec<f64>, void_ratio: Vec<f64>, sigma_v_kpa: f64) -> Self {
        Self {
            stress_kpa,
            strain,
            void_ratio,
            sigma_v_kpa,
        }
    }

    pub fn len(&self) -> usize {
        self.stress_kpa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stress_kpa.is_empty()
    }

    pub fn stress_kpa(&self) -> &[f64] {
        &self.stress_kpa
    }

    pub fn strain(&self) -> &[f64] {
        &self.strain
    }

    pub fn void_ratio(&self) -> &[f64] {
        &self.void_ratio
    }

    pub fn sigma_v_kpa(&self) -> f64 {
        self.sigma_v_kpa
    }

    /// 첫 행의 간극비(재하 전 간극비).
    pub fn initial_void_ratio(&self) -> Option<f64> {
        self.void_ratio.first().copied()
    }

    /// 압축곡선(간극비 - log 응력) 그림을 만든다. 분석 전에 원본 곡선을
    /// 먼저 보여주는 용도이며, 새 그림을 매번 새로 만든다.
    pub fn plot(&self) -> Figure {
        let mut axes =
            Axes::stress_semilog("Effective vertical stress [kPa]", "Void ratio");
        axes.traces.push(Trace::new(
            self.stress_kpa.clone(),
            self.void_ratio.clone(),
            TraceKind::LineMarkers,
            0,
        ));
        let mut entries = vec![LegendEntry {
            text: Text::plain("Laboratory data"),
            trace: 0,
        }];
        if self.sigma_v_kpa > 0.0 && !self.void_ratio.is_empty() {
            let (e_min, e_max) = bounds(&self.void_ratio);
            axes.traces.push(Trace::new(
                vec![self.sigma_v_kpa, self.sigma_v_kpa],
                vec![e_min, e_max],
                TraceKind::Dashed,
                3,
            ));
            entries.push(LegendEntry {
                text: Text::plain(format!(
                    "In-situ stress = {:.1} kPa",
                    self.sigma_v_kpa
                )),
                trace: 1,
            });
        }
        axes.legend = Some(Legend {
            title: Some(Text::plain("\\bf{Compressibility\\ curve}")),
            entries,
        });
        Figure::single(axes)
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}
