use clap::Parser;
use std::path::PathBuf;

use flowloop_analysis::flowloop::constants::PhysicalConstants;
use flowloop_analysis::flowloop::outliers::OutlierPolicy;
use flowloop_analysis::i18n::{self, keys, Translator};
use flowloop_analysis::{app, config, plot};

/// 플로우 루프 측정 데이터 일괄 분석 CLI.
#[derive(Debug, Parser)]
#[command(name = "flowloop_analysis", version)]
struct Cli {
    /// 측정 CSV 경로 (설정 파일보다 우선)
    #[arg(long)]
    data: Option<PathBuf>,
    /// 이상치 제거 정책
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// UI 언어 (auto/ko/en)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 분석 후 산점도 창을 띄우지 않는다
    #[arg(long)]
    no_plot: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PolicyArg {
    Iqr,
    ThreeSigma,
}

impl From<PolicyArg> for OutlierPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Iqr => OutlierPolicy::Iqr,
            PolicyArg::ThreeSigma => OutlierPolicy::ThreeSigma,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정과 언어를 결정한 뒤 분석을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;

    let lang_code = i18n::resolve_language(
        cli.lang.as_deref().unwrap_or("auto"),
        Some(cfg.language.as_str()),
    );
    let tr = Translator::new(&lang_code);

    if let Some(data) = cli.data {
        cfg.data_file = data;
    } else if !cfg.data_file.exists() {
        // 설정된 파일이 없으면 네이티브 대화상자로 위치를 묻는다. 취소하면
        // 로더가 원래 경로로 실패하게 둔다.
        if let Some(picked) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_title(tr.t(keys::PICK_DATA_FILE))
            .pick_file()
        {
            cfg.data_file = picked;
        }
    }
    if let Some(policy) = cli.policy {
        cfg.outlier_policy = policy.into();
    }

    let constants = PhysicalConstants::default();
    let report = app::run(&cfg, &constants, &tr)?;

    if cfg.show_plots && !cli.no_plot {
        plot::show(&report, &tr)?;
    }
    Ok(())
}
