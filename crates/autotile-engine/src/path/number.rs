/// Formats a coordinate in its shortest form: `5`, `27`, `0.5`.
///
/// Negative zero is written as `0`.
pub(crate) fn fmt_num(v: f32) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}
