use std::path::Path;

/// 계측 로거가 내보내는 CSV 헤더. 컬럼 순서는 무관하고 이름의 존재가 계약이다.
/// 차압 세 컬럼은 헤더 표기와 달리 inH₂O 값을 담는다 (로거 펌웨어의 표기 오류를
/// 그대로 유지한다).
pub const COL_INDEX: &str = "Index";
pub const COL_FLOW_RATE: &str = "Flow Rate (gal/min)";
pub const COL_DIAMETER: &str = "Diameter (inch)";
pub const COL_DP_STRAIGHT: &str = "Pressure Stra (psi)";
pub const COL_DP_GLOBE: &str = "Pressure Globe (psi)";
pub const COL_DP_BALL: &str = "Pressure Ball (psi)";

/// 측정 테이블. 모든 컬럼은 같은 길이의 평행 벡터이며 행 순서 = 샘플 순서이다.
#[derive(Debug, Clone, Default)]
pub struct MeasurementTable {
    /// 샘플 번호
    pub index: Vec<u32>,
    /// 유량 (로드 직후 gal/min, 정규화 후 m³/s)
    pub flow_rate: Vec<f64>,
    /// 배관 내경 (로드 직후 inch, 정규화 후 m)
    pub diameter: Vec<f64>,
    /// 직관 구간 차압 (로드 직후 inH₂O, 정규화 후 Pa)
    pub dp_straight: Vec<f64>,
    /// 글로브 밸브 구간 차압
    pub dp_globe: Vec<f64>,
    /// 볼 밸브 구간 차압
    pub dp_ball: Vec<f64>,
}

impl MeasurementTable {
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// 측정 데이터 로드 시 발생 가능한 오류. 모두 치명적이며 부분 처리는 없다.
#[derive(Debug)]
pub enum DataFormatError {
    /// 파일 열기/구조 오류 (행 길이 불일치 포함)
    Csv(csv::Error),
    /// 필수 컬럼 누락
    MissingColumn(&'static str),
    /// 숫자로 해석할 수 없는 셀
    InvalidNumber { column: &'static str, line: u64 },
}

impl std::fmt::Display for DataFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataFormatError::Csv(e) => write!(f, "CSV 읽기 오류: {e}"),
            DataFormatError::MissingColumn(name) => {
                write!(f, "필수 컬럼이 없습니다: {name}")
            }
            DataFormatError::InvalidNumber { column, line } => {
                write!(f, "숫자가 아닌 값입니다 (컬럼 {column}, {line}행)")
            }
        }
    }
}

impl std::error::Error for DataFormatError {}

impl From<csv::Error> for DataFormatError {
    fn from(value: csv::Error) -> Self {
        DataFormatError::Csv(value)
    }
}

/// CSV 파일 하나를 측정 테이블로 읽는다.
///
/// 여섯 개 필수 컬럼이 모두 있어야 하며, 행 길이가 어긋나면 csv 오류로 중단된다.
/// 파일 읽기 외의 부수효과는 없다.
pub fn load_table(path: &Path) -> Result<MeasurementTable, DataFormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let position = |name: &'static str| -> Result<usize, DataFormatError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataFormatError::MissingColumn(name))
    };

    let idx_index = position(COL_INDEX)?;
    let idx_flow = position(COL_FLOW_RATE)?;
    let idx_dia = position(COL_DIAMETER)?;
    let idx_stra = position(COL_DP_STRAIGHT)?;
    let idx_globe = position(COL_DP_GLOBE)?;
    let idx_ball = position(COL_DP_BALL)?;

    let mut table = MeasurementTable::default();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let cell = |pos: usize, column: &'static str| -> Result<f64, DataFormatError> {
            record
                .get(pos)
                .and_then(|s| s.parse::<f64>().ok())
                .ok_or(DataFormatError::InvalidNumber { column, line })
        };
        let sample = record
            .get(idx_index)
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or(DataFormatError::InvalidNumber {
                column: COL_INDEX,
                line,
            })?;

        table.index.push(sample);
        table.flow_rate.push(cell(idx_flow, COL_FLOW_RATE)?);
        table.diameter.push(cell(idx_dia, COL_DIAMETER)?);
        table.dp_straight.push(cell(idx_stra, COL_DP_STRAIGHT)?);
        table.dp_globe.push(cell(idx_globe, COL_DP_GLOBE)?);
        table.dp_ball.push(cell(idx_ball, COL_DP_BALL)?);
    }
    Ok(table)
}
