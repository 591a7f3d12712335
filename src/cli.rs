use clap::{Parser, Subcommand};
use crate::export::ExportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cert-difficulty")]
#[command(about = "자격증 난이도 산정·조회 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 난이도를 산정하고 JSON/Excel로 출력
    Score {
        /// 자격증 통합 데이터 (.xlsx)
        input: Option<PathBuf>,

        /// 열 이름 매핑 JSON
        #[arg(long)]
        schema: Option<PathBuf>,

        /// 등급 산정에서 제외할 자격증ID 목록 파일
        #[arg(long)]
        exclude_ids: Option<PathBuf>,

        /// 전체 합격률이 없는 자격증을 등급 산정에서 제외
        #[arg(long)]
        exclude_missing_pass_rate: bool,

        /// 출력 형식 (json/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 출력 파일/디렉터리 (기본: 현재 디렉터리)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 조건에 맞는 자격증을 난이도 순으로 표시
    List {
        /// 자격증 통합 데이터 (.xlsx)
        input: Option<PathBuf>,

        /// 열 이름 매핑 JSON
        #[arg(long)]
        schema: Option<PathBuf>,

        /// 자격증명 검색
        #[arg(short, long)]
        query: Option<String>,

        /// 자격증_분류 (여러 번 지정 가능)
        #[arg(long)]
        category: Vec<String>,

        /// 등급 구간 100/200/300/400/500 (여러 번 지정 가능)
        #[arg(long)]
        grade: Vec<i64>,

        /// 필기 포함
        #[arg(long)]
        written: bool,

        /// 실기 포함
        #[arg(long)]
        practical: bool,

        /// 면접 포함
        #[arg(long)]
        interview: bool,

        /// 난이도 등급 1~5 (여러 번 지정 가능)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        tier: Vec<u8>,

        /// 학과명으로 자격증 한정
        #[arg(long)]
        major: Option<String>,

        /// 전공 → 자격증 매핑 (.xlsx)
        #[arg(long)]
        majors: Option<PathBuf>,

        /// 표시 건수
        #[arg(short = 'n', long, default_value = "30")]
        limit: usize,
    },

    /// 학과 목록/검색
    Majors {
        /// 전공 → 자격증 매핑 (.xlsx)
        #[arg(long)]
        majors: Option<PathBuf>,

        /// 학과명 검색어
        #[arg(short, long)]
        query: Option<String>,
    },

    /// 자격증의 관련 직무와 직업 상세 정보
    Jobs {
        /// 자격증ID
        cert_id: String,

        /// 자격증 → 직무 매핑 (.xlsx)
        #[arg(long)]
        jobs: Option<PathBuf>,

        /// 직업 상세 정보 (.xlsx)
        #[arg(long)]
        job_info: Option<PathBuf>,

        /// 상세 정보를 볼 jobdicSeq
        #[arg(long)]
        seq: Option<String>,
    },

    /// 설정 표시/초기화
    Config {
        /// 설정 표시
        #[arg(long)]
        show: bool,

        /// 기본 설정 파일 생성
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        let cli = Cli::parse_from(["cert-difficulty", "score", "certs.xlsx", "-f", "json", "--exclude-missing-pass-rate"]);
        match cli.command {
            Commands::Score { input, format, exclude_missing_pass_rate, .. } => {
                assert_eq!(input, Some(PathBuf::from("certs.xlsx")));
                assert_eq!(format, ExportFormat::Json);
                assert!(exclude_missing_pass_rate);
            }
            _ => panic!("score 명령이어야 함"),
        }
    }

    #[test]
    fn test_parse_list_repeated_filters() {
        let cli = Cli::parse_from([
            "cert-difficulty", "-v", "list", "--grade", "300", "--grade", "400", "--tier", "5", "--practical",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::List { grade, tier, practical, limit, .. } => {
                assert_eq!(grade, vec![300, 400]);
                assert_eq!(tier, vec![5]);
                assert!(practical);
                assert_eq!(limit, 30);
            }
            _ => panic!("list 명령이어야 함"),
        }
    }

    #[test]
    fn test_tier_out_of_range() {
        let result = Cli::try_parse_from(["cert-difficulty", "list", "--tier", "6"]);
        assert!(result.is_err());
    }
}
