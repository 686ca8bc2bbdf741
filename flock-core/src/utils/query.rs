/// Legge l'intero in testa a una stringa, come fa `parseInt(s, 10)` in un browser:
/// spazi iniziali ignorati, segno opzionale, si ferma al primo carattere non numerico.
/// Restituisce `None` se non c'è nessuna cifra o se il valore non sta in un `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
