// ============================================================================
// CONTENT-DISPOSITION - Nombre sugerido para guardar la imagen procesada
// ============================================================================
// Acepta `filename="out.png"`, `filename='out.png'` y `filename=out.png`.
// `filename*=` (RFC 5987) no cuenta como coincidencia.
// ============================================================================

const PARAM: &str = "filename";

/// Extraer el nombre de archivo de un header Content-Disposition.
/// Retorna None si no hay parámetro `filename` utilizable.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let lower = header.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(offset) = lower[search_from..].find(PARAM) {
        let start = search_from + offset + PARAM.len();
        search_from = start;

        if let Some(name) = parse_param_value(&header[start..]) {
            return Some(name);
        }
    }

    None
}

/// `rest` empieza justo después de la palabra `filename`
fn parse_param_value(rest: &str) -> Option<String> {
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let rest = rest
        .strip_prefix(|c: char| c == '"' || c == '\'')
        .unwrap_or(rest);

    let end = rest
        .find(|c: char| c == '"' || c == '\'' || c == ';')
        .unwrap_or(rest.len());
    let value = rest[..end].trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
