//! Sistema de tablas para output CLI.
//!
//! Proporciona:
//! - Wrapper sobre comfy-table
//! - Estilos predefinidos
//! - Tablas especializadas para reportes de lint/fix

use comfy_table::{modifiers, presets, ContentArrangement, Table};

// ═══════════════════════════════════════════════════════════════════════════
// ESTILOS PREDEFINIDOS
// ═══════════════════════════════════════════════════════════════════════════

/// Estilos de tabla predefinidos.
#[derive(Debug, Clone, Copy, Default)]
pub enum TableStyle {
    /// Estilo completo con bordes.
    Full,
    /// Estilo compacto sin bordes laterales.
    #[default]
    Compact,
    /// Estilo mínimo solo con separadores.
    Minimal,
}

// ═══════════════════════════════════════════════════════════════════════════
// BUILDER DE TABLAS
// ═══════════════════════════════════════════════════════════════════════════

/// Crea una nueva tabla con headers.
pub fn create_table<S: AsRef<str>>(headers: &[S]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);

    let headers: Vec<&str> = headers.iter().map(|s| s.as_ref()).collect();
    table.set_header(headers);

    table
}

/// Crea tabla con estilo específico.
pub fn create_styled_table<S: AsRef<str>>(headers: &[S], style: TableStyle) -> Table {
    let mut table = create_table(headers);

    match style {
        TableStyle::Full => {
            table.load_preset(presets::UTF8_FULL);
        }
        TableStyle::Compact => {
            table.load_preset(presets::UTF8_FULL_CONDENSED);
        }
        TableStyle::Minimal => {
            table.load_preset(presets::UTF8_HORIZONTAL_ONLY);
        }
    }

    table
}

/// Agrega una fila a la tabla.
pub fn add_row<S: ToString>(table: &mut Table, values: &[S]) {
    let row: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    table.add_row(row);
}

/// Imprime la tabla.
pub fn print_table(table: &Table) {
    println!("{}", table);
}

// ═══════════════════════════════════════════════════════════════════════════
// TABLAS ESPECIALIZADAS
// ═══════════════════════════════════════════════════════════════════════════

/// Crea tabla de enlaces rotos.
pub fn create_broken_links_table() -> Table {
    create_styled_table(&["Archivo", "Línea", "Destino"], TableStyle::Compact)
}

/// Crea tabla de reparaciones aplicadas.
pub fn create_heal_table() -> Table {
    create_styled_table(
        &["Archivo", "Línea", "Antes", "Después"],
        TableStyle::Compact,
    )
}

/// Crea tabla de saltos de reparación (ambigüedades).
pub fn create_skipped_table() -> Table {
    create_styled_table(
        &["Archivo", "Línea", "Destino", "Razón"],
        TableStyle::Minimal,
    )
}
