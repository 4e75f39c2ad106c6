//! Static palette definition table, following the line-type scheme of
//! the gnuplot-palettes collection
//! (<https://github.com/Gnuplotting/gnuplot-palettes>).

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Palette applied when the user has not chosen one.
pub const DEFAULT_PALETTE: &str = "dark2";

const DARK2: &str = "\
set linetype 1 lc rgb '#1B9E77' # dark teal
set linetype 2 lc rgb '#D95F02' # dark orange
set linetype 3 lc rgb '#7570B3' # dark lilac
set linetype 4 lc rgb '#E7298A' # dark magenta
set linetype 5 lc rgb '#66A61E' # dark lime green
set linetype 6 lc rgb '#E6AB02' # dark banana
set linetype 7 lc rgb '#A6761D' # dark tan
set linetype 8 lc rgb '#666666' # dark gray
set linetype cycle 8
set palette maxcolors 8
set palette defined ( 0 '#1B9E77', 1 '#D95F02', 2 '#7570B3', 3 '#E7298A', 4 '#66A61E', 5 '#E6AB02', 6 '#A6761D', 7 '#666666' )";

const PARULA: &str = "\
set linetype 1 lc rgb '#0072BD' # blue
set linetype 2 lc rgb '#D95319' # orange
set linetype 3 lc rgb '#EDB120' # yellow
set linetype 4 lc rgb '#7E2F8E' # purple
set linetype 5 lc rgb '#77AC30' # green
set linetype 6 lc rgb '#4DBEEE' # light blue
set linetype 7 lc rgb '#A2142F' # red
set linetype cycle 7
set palette defined ( 0 '#352A87', 1 '#0363E1', 2 '#1485D4', 3 '#06A7C6', 4 '#38B99E', 5 '#92BF73', 6 '#D9BA56', 7 '#FCCE2E', 8 '#F9FB0E' )";

const JET: &str = "\
set linetype 1 lc rgb '#0000FF' # blue
set linetype 2 lc rgb '#007F00' # green
set linetype 3 lc rgb '#FF0000' # red
set linetype 4 lc rgb '#00BFBF' # cyan
set linetype 5 lc rgb '#BF00BF' # pink
set linetype 6 lc rgb '#BFBF00' # yellow
set linetype 7 lc rgb '#3F3F3F' # gray
set linetype cycle 7
set palette defined ( 0 '#000090', 1 '#000FFF', 2 '#0090FF', 3 '#0FFFEE', 4 '#90FF70', 5 '#FFEE00', 6 '#FF7000', 7 '#EE0000', 8 '#7F0000' )";

const PASTEL1: &str = "\
set linetype 1 lc rgb '#FBB4AE' # pale red
set linetype 2 lc rgb '#B3CDE3' # pale blue
set linetype 3 lc rgb '#CCEBC5' # pale green
set linetype 4 lc rgb '#DECBE4' # pale purple
set linetype 5 lc rgb '#FED9A6' # pale orange
set linetype 6 lc rgb '#FFFFCC' # pale yellow
set linetype 7 lc rgb '#E5D8BD' # pale brown
set linetype 8 lc rgb '#FDDAEC' # pale pink
set linetype cycle 8
set palette maxcolors 8
set palette defined ( 0 '#FBB4AE', 1 '#B3CDE3', 2 '#CCEBC5', 3 '#DECBE4', 4 '#FED9A6', 5 '#FFFFCC', 6 '#E5D8BD', 7 '#FDDAEC' )";

const VIRIDIS: &str = "\
set linetype 1 lc rgb '#440154' # dark purple
set linetype 2 lc rgb '#472C7A' # purple
set linetype 3 lc rgb '#3B518B' # blue
set linetype 4 lc rgb '#2C718E' # blue
set linetype 5 lc rgb '#21908D' # blue green
set linetype 6 lc rgb '#27AD81' # green
set linetype 7 lc rgb '#5CC863' # green
set linetype 8 lc rgb '#AADC32' # lime green
set linetype 9 lc rgb '#FDE725' # yellow
set linetype cycle 9
set palette defined ( 0 '#440154', 1 '#472C7A', 2 '#3B518B', 3 '#2C718E', 4 '#21908D', 5 '#27AD81', 6 '#5CC863', 7 '#AADC32', 8 '#FDE725' )";

lazy_static! {
    static ref PALETTES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("dark2", DARK2);
        m.insert("parula", PARULA);
        m.insert("jet", JET);
        m.insert("pastel1", PASTEL1);
        m.insert("viridis", VIRIDIS);
        m
    };
}

/// Return the definition for the named palette, or the default table
/// when the name is unknown.
pub(crate) fn lookup(name: &str) -> &'static str {
    PALETTES
        .get(name)
        .copied()
        .unwrap_or_else(|| PALETTES[DEFAULT_PALETTE])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_palettes_resolve() {
        assert!(lookup("parula").contains("#0072BD"));
        assert!(lookup("viridis").contains("#FDE725"));
    }

    #[test]
    fn unknown_palette_falls_back_to_default() {
        assert_eq!(lookup("no-such-palette"), lookup(DEFAULT_PALETTE));
    }
}
