// ============================================================
// Layer 3 — QaRecord Domain Type
// ============================================================
// One row of the customer-service dump after the raw columns
// have been unquoted and the structured fields pulled out of
// the question header.
//
// A raw question looks roughly like:
//   "주문상태 : <배송중> 문의유형 : <배송> @내용 : 언제 오나요"
// from which we keep
//   order_state = "배송중", cate0 = "배송", question = "언제 오나요"
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// A cleaned customer-service question/answer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    /// Inquiry type taken from the `문의유형` header, if present
    pub cate0: Option<String>,
    pub cate1: String,
    pub cate2: String,
    pub cate3: String,

    /// Product code and name as given in the dump
    pub prd_cd: String,
    pub prd_nm: String,

    /// Order state taken from the `주문상태` header, if present
    pub order_state: Option<String>,

    /// Question body after `@내용 :`; `None` when the header is missing
    pub question: Option<String>,

    pub answer: String,
}

/// A preprocessed (POS-filtered) question/answer pair as stored
/// in the JSON-lines files consumed by the question loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTextPair {
    pub question_pos_text: Vec<String>,
    #[serde(default)]
    pub answer_pos_text: Vec<String>,
}

impl PosTextPair {
    pub fn question_text(&self) -> String {
        self.question_pos_text.join(" ")
    }

    pub fn answer_text(&self) -> String {
        self.answer_pos_text.join(" ")
    }
}
