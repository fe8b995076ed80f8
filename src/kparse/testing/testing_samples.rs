//! Vetted tagged sentences

use crate::kparse::lexing::token::parse_descriptors;
use crate::kparse::lexing::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// 저 작은 소년의 남동생은 밥을 먹다.
    Possessive,
    /// 빵을 주세요.
    Request,
    /// 학교에.
    StandAlone,
    /// 비가 와서 집에 갔다.
    Subordinate,
    /// 밥을 먹고 학교에 갔다.
    Sequential,
    /// 먹고 싶어요.
    Auxiliary,
    /// 빵과 물을 먹었어요.
    Conjunction,
    /// 사과 세 개를 샀어요.
    Count,
    /// 가지 않았다.
    Negative,
    /// 나는 학생이다.
    Copula,
}

impl Sample {
    pub const ALL: [Sample; 10] = [
        Sample::Possessive,
        Sample::Request,
        Sample::StandAlone,
        Sample::Subordinate,
        Sample::Sequential,
        Sample::Auxiliary,
        Sample::Conjunction,
        Sample::Count,
        Sample::Negative,
        Sample::Copula,
    ];

    pub fn descriptors(self) -> &'static str {
        match self {
            Sample::Possessive => {
                "저:MM 작:VA 은:ETM 소년:NNG 의:JKG 남동생:NNG 은:TOP 밥:NNG 을:JKO 먹:VV 다:EF .:SF"
            }
            Sample::Request => "빵:NNG 을:JKO 주:VV 세요:EF .:SF",
            Sample::StandAlone => "학교:NNG 에:JKB .:SF",
            Sample::Subordinate => "비:NNG 가:JKS 오:VV 아서:EC 집:NNG 에:JKB 가:VV 았:EP 다:EF .:SF",
            Sample::Sequential => {
                "밥:NNG 을:JKO 먹:VV 고:CEC_고 학교:NNG 에:JKB 가:VV 았:EP 다:EF .:SF"
            }
            Sample::Auxiliary => "먹:VV 고:EC 싶:VX 어요:EF .:SF",
            Sample::Conjunction => "빵:NNG 과:JC 물:NNG 을:JKO 먹:VV 었:EP 어요:EF .:SF",
            Sample::Count => "사과:NNG 세:MM 개:NNB 를:JKO 샀:VV 어요:EF .:SF",
            Sample::Negative => "가:VV 지:JNEC 않:VX 았:EP 다:EF .:SF",
            Sample::Copula => "나:NP 는:TOP 학생:NNG 이:VCP 다:EF .:SF",
        }
    }

    /// Number of tokens before the sentence-final token
    pub fn body_len(self) -> usize {
        self.tokens().len() - 1
    }

    pub fn tokens(self) -> Vec<Token> {
        parse_descriptors(self.descriptors()).unwrap_or_default()
    }
}
