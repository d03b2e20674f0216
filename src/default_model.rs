//! Compiled-in model for English words and identifiers.

use crate::model::{ModelSpec, TableModel};
use std::sync::OnceLock;

/// Known characters in id order, most frequent first.
const CHARS: &str = "eaiothnrslucwmdbpfgvyk-HMT'BxIWL";

/// Successors of each entry of [`CHARS`], most frequent first.
const SUCCESSORS: [&str; 32] = [
    "rsndaltcmeivpxwy", // e
    "ntrlsciydmbpgvkw", // a
    "ntsolcedrgmavfkb", // i
    "nurfmwltodpsvcbk", // o
    "hioeasruyltwmcbn", // t
    "eaiotuyrmlnsbdwf", // h
    "dgtesaiocykluvfh", // n
    "eaoistydnmulcgkp", // r
    "tesiaohupclmkwny", // s
    "eliaoydsutfvmkpc", // l
    "rnstlcmpgbeiadfo", // u
    "oehaktiruclsydbm", // c
    "aeihornslydbtcmu", // w
    "eaoipsbulymnfcdh", // m
    "eiaosuylrndgmvtw", // d
    "eloauirysbtdcmnh", // b
    "reaolitupshmydcf", // p
    "oeirautflysnmdcb", // f
    "ehraoilsunytgdmb", // g
    "eiaoyurs",         // v
    "oesatipmdlnbcwrg", // y
    "eisnaylohurtdmfw", // k
    "tsbcmdpfwlhaeior", // -
    "eaoiu",            // H
    "aoeiyu",           // M
    "hoeira",           // T
    "stdlrmv",          // '
    "eaourli",          // B
    "pticea",           // x
    "ntsmfr",           // I
    "haeiro",           // W
    "aoieu",            // L
];

/// The compiled-in English model as a spec.
pub fn english_spec() -> ModelSpec {
    ModelSpec {
        chars: CHARS.to_string(),
        successors: SUCCESSORS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Process-wide instance of the compiled-in English model.
pub fn default_model() -> &'static TableModel {
    static MODEL: OnceLock<TableModel> = OnceLock::new();
    MODEL.get_or_init(|| TableModel::build(english_spec()))
}
