use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_FLOW_SPEED_HEADING: &str = "report.flow_speed_heading";
    pub const REPORT_SAMPLE: &str = "report.sample";
    pub const REPORT_AVERAGE: &str = "report.average";
    pub const REPORT_RELATIVE_ERROR: &str = "report.relative_error";
    pub const REPORT_RELATIVE_RMSE: &str = "report.relative_rmse";

    pub const SECTION_FRICTION_FACTOR: &str = "section.friction_factor";
    pub const SECTION_GLOBE_VALVE: &str = "section.globe_valve";
    pub const SECTION_BALL_VALVE: &str = "section.ball_valve";

    pub const PLOT_IDEAL_VALUE: &str = "plot.ideal_value";
    pub const PLOT_AVERAGE_VALUE: &str = "plot.average_value";
    pub const PLOT_SAMPLE_INDEX: &str = "plot.sample_index";
    pub const PLOT_PREV: &str = "plot.prev";
    pub const PLOT_NEXT: &str = "plot.next";
    pub const PLOT_CLOSE: &str = "plot.close";

    pub const PICK_DATA_FILE: &str = "prompt.pick_data_file";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다. 내장 ko/en 문자열만 사용한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    let loc = get_locale()?;
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    match key {
        keys::ERROR_PREFIX => "오류",
        keys::REPORT_TITLE => "플로우 루프 분석 결과",
        keys::REPORT_FLOW_SPEED_HEADING => "샘플별 유속",
        keys::REPORT_SAMPLE => "샘플",
        keys::REPORT_AVERAGE => "평균",
        keys::REPORT_RELATIVE_ERROR => "상대 오차",
        keys::REPORT_RELATIVE_RMSE => "상대 RMSE",
        keys::SECTION_FRICTION_FACTOR => "마찰계수 (직관 구간)",
        keys::SECTION_GLOBE_VALVE => "부차 손실계수 - 글로브 밸브",
        keys::SECTION_BALL_VALVE => "부차 손실계수 - 볼 밸브",
        keys::PLOT_IDEAL_VALUE => "이상값",
        keys::PLOT_AVERAGE_VALUE => "평균값",
        keys::PLOT_SAMPLE_INDEX => "샘플 번호",
        keys::PLOT_PREV => "이전",
        keys::PLOT_NEXT => "다음",
        keys::PLOT_CLOSE => "닫기",
        keys::PICK_DATA_FILE => "측정 CSV 파일 선택",
        _ => "?",
    }
}

fn en(key: &str) -> Option<&'static str> {
    let s = match key {
        keys::ERROR_PREFIX => "error",
        keys::REPORT_TITLE => "Flow Loop Analysis Results",
        keys::REPORT_FLOW_SPEED_HEADING => "Flow speed per sample",
        keys::REPORT_SAMPLE => "sample",
        keys::REPORT_AVERAGE => "Average",
        keys::REPORT_RELATIVE_ERROR => "Relative Error",
        keys::REPORT_RELATIVE_RMSE => "Relative RMSE",
        keys::SECTION_FRICTION_FACTOR => "Friction Factor (straight section)",
        keys::SECTION_GLOBE_VALVE => "Minor Loss Coefficient - Globe Valve",
        keys::SECTION_BALL_VALVE => "Minor Loss Coefficient - Ball Valve",
        keys::PLOT_IDEAL_VALUE => "Ideal Value",
        keys::PLOT_AVERAGE_VALUE => "Average Value",
        keys::PLOT_SAMPLE_INDEX => "Sample Index",
        keys::PLOT_PREV => "Prev",
        keys::PLOT_NEXT => "Next",
        keys::PLOT_CLOSE => "Close",
        keys::PICK_DATA_FILE => "Select measurement CSV",
        _ => return None,
    };
    Some(s)
}
