//! Named colors
//!
//! The CSS named color table, keyed by lower-cased name.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Named colors (name -> RGB)
static NAMED_COLORS: LazyLock<FxHashMap<&'static str, [u8; 3]>> = LazyLock::new(|| {
    let mut m = FxHashMap::default();

    // Basic colors
    m.insert("black", [0, 0, 0]);
    m.insert("white", [255, 255, 255]);
    m.insert("red", [255, 0, 0]);
    m.insert("green", [0, 128, 0]);
    m.insert("blue", [0, 0, 255]);
    m.insert("yellow", [255, 255, 0]);
    m.insert("cyan", [0, 255, 255]);
    m.insert("aqua", [0, 255, 255]);
    m.insert("magenta", [255, 0, 255]);
    m.insert("fuchsia", [255, 0, 255]);

    // Grays
    m.insert("gray", [128, 128, 128]);
    m.insert("grey", [128, 128, 128]);
    m.insert("silver", [192, 192, 192]);
    m.insert("darkgray", [169, 169, 169]);
    m.insert("darkgrey", [169, 169, 169]);
    m.insert("dimgray", [105, 105, 105]);
    m.insert("dimgrey", [105, 105, 105]);
    m.insert("lightgray", [211, 211, 211]);
    m.insert("lightgrey", [211, 211, 211]);
    m.insert("gainsboro", [220, 220, 220]);
    m.insert("whitesmoke", [245, 245, 245]);
    m.insert("slategray", [112, 128, 144]);
    m.insert("slategrey", [112, 128, 144]);
    m.insert("lightslategray", [119, 136, 153]);
    m.insert("lightslategrey", [119, 136, 153]);
    m.insert("darkslategray", [47, 79, 79]);
    m.insert("darkslategrey", [47, 79, 79]);

    // Reds and pinks
    m.insert("maroon", [128, 0, 0]);
    m.insert("darkred", [139, 0, 0]);
    m.insert("brown", [165, 42, 42]);
    m.insert("firebrick", [178, 34, 34]);
    m.insert("crimson", [220, 20, 60]);
    m.insert("indianred", [205, 92, 92]);
    m.insert("lightcoral", [240, 128, 128]);
    m.insert("salmon", [250, 128, 114]);
    m.insert("darksalmon", [233, 150, 122]);
    m.insert("lightsalmon", [255, 160, 122]);
    m.insert("pink", [255, 192, 203]);
    m.insert("lightpink", [255, 182, 193]);
    m.insert("hotpink", [255, 105, 180]);
    m.insert("deeppink", [255, 20, 147]);
    m.insert("mediumvioletred", [199, 21, 133]);
    m.insert("palevioletred", [219, 112, 147]);

    // Oranges and browns
    m.insert("orange", [255, 165, 0]);
    m.insert("darkorange", [255, 140, 0]);
    m.insert("orangered", [255, 69, 0]);
    m.insert("tomato", [255, 99, 71]);
    m.insert("coral", [255, 127, 80]);
    m.insert("chocolate", [210, 105, 30]);
    m.insert("saddlebrown", [139, 69, 19]);
    m.insert("sienna", [160, 82, 45]);
    m.insert("peru", [205, 133, 63]);
    m.insert("sandybrown", [244, 164, 96]);
    m.insert("rosybrown", [188, 143, 143]);
    m.insert("tan", [210, 180, 140]);
    m.insert("burlywood", [222, 184, 135]);
    m.insert("wheat", [245, 222, 179]);
    m.insert("navajowhite", [255, 222, 173]);
    m.insert("bisque", [255, 228, 196]);
    m.insert("blanchedalmond", [255, 235, 205]);
    m.insert("cornsilk", [255, 248, 220]);
    m.insert("peachpuff", [255, 218, 185]);
    m.insert("moccasin", [255, 228, 181]);
    m.insert("papayawhip", [255, 239, 213]);
    m.insert("antiquewhite", [250, 235, 215]);
    m.insert("linen", [250, 240, 230]);
    m.insert("oldlace", [253, 245, 230]);
    m.insert("seashell", [255, 245, 238]);
    m.insert("mistyrose", [255, 228, 225]);
    m.insert("lavenderblush", [255, 240, 245]);
    m.insert("snow", [255, 250, 250]);
    m.insert("floralwhite", [255, 250, 240]);
    m.insert("ivory", [255, 255, 240]);

    // Yellows
    m.insert("gold", [255, 215, 0]);
    m.insert("goldenrod", [218, 165, 32]);
    m.insert("darkgoldenrod", [184, 134, 11]);
    m.insert("palegoldenrod", [238, 232, 170]);
    m.insert("lightgoldenrodyellow", [250, 250, 210]);
    m.insert("lightyellow", [255, 255, 224]);
    m.insert("lemonchiffon", [255, 250, 205]);
    m.insert("khaki", [240, 230, 140]);
    m.insert("darkkhaki", [189, 183, 107]);
    m.insert("beige", [245, 245, 220]);

    // Greens
    m.insert("lime", [0, 255, 0]);
    m.insert("limegreen", [50, 205, 50]);
    m.insert("lawngreen", [124, 252, 0]);
    m.insert("chartreuse", [127, 255, 0]);
    m.insert("greenyellow", [173, 255, 47]);
    m.insert("yellowgreen", [154, 205, 50]);
    m.insert("olivedrab", [107, 142, 35]);
    m.insert("olive", [128, 128, 0]);
    m.insert("darkolivegreen", [85, 107, 47]);
    m.insert("darkgreen", [0, 100, 0]);
    m.insert("forestgreen", [34, 139, 34]);
    m.insert("seagreen", [46, 139, 87]);
    m.insert("mediumseagreen", [60, 179, 113]);
    m.insert("darkseagreen", [143, 188, 143]);
    m.insert("lightgreen", [144, 238, 144]);
    m.insert("palegreen", [152, 251, 152]);
    m.insert("springgreen", [0, 255, 127]);
    m.insert("mediumspringgreen", [0, 250, 154]);
    m.insert("honeydew", [240, 255, 240]);
    m.insert("mintcream", [245, 255, 250]);

    // Cyans and teals
    m.insert("teal", [0, 128, 128]);
    m.insert("darkcyan", [0, 139, 139]);
    m.insert("lightseagreen", [32, 178, 170]);
    m.insert("mediumaquamarine", [102, 205, 170]);
    m.insert("aquamarine", [127, 255, 212]);
    m.insert("turquoise", [64, 224, 208]);
    m.insert("mediumturquoise", [72, 209, 204]);
    m.insert("darkturquoise", [0, 206, 209]);
    m.insert("paleturquoise", [175, 238, 238]);
    m.insert("lightcyan", [224, 255, 255]);
    m.insert("azure", [240, 255, 255]);
    m.insert("cadetblue", [95, 158, 160]);

    // Blues
    m.insert("navy", [0, 0, 128]);
    m.insert("darkblue", [0, 0, 139]);
    m.insert("mediumblue", [0, 0, 205]);
    m.insert("midnightblue", [25, 25, 112]);
    m.insert("royalblue", [65, 105, 225]);
    m.insert("steelblue", [70, 130, 180]);
    m.insert("dodgerblue", [30, 144, 255]);
    m.insert("deepskyblue", [0, 191, 255]);
    m.insert("cornflowerblue", [100, 149, 237]);
    m.insert("skyblue", [135, 206, 235]);
    m.insert("lightskyblue", [135, 206, 250]);
    m.insert("lightsteelblue", [176, 196, 222]);
    m.insert("lightblue", [173, 216, 230]);
    m.insert("powderblue", [176, 224, 230]);
    m.insert("aliceblue", [240, 248, 255]);
    m.insert("ghostwhite", [248, 248, 255]);

    // Purples
    m.insert("purple", [128, 0, 128]);
    m.insert("rebeccapurple", [102, 51, 153]);
    m.insert("indigo", [75, 0, 130]);
    m.insert("darkmagenta", [139, 0, 139]);
    m.insert("darkviolet", [148, 0, 211]);
    m.insert("darkorchid", [153, 50, 204]);
    m.insert("darkslateblue", [72, 61, 139]);
    m.insert("slateblue", [106, 90, 205]);
    m.insert("mediumslateblue", [123, 104, 238]);
    m.insert("mediumpurple", [147, 112, 219]);
    m.insert("blueviolet", [138, 43, 226]);
    m.insert("mediumorchid", [186, 85, 211]);
    m.insert("orchid", [218, 112, 214]);
    m.insert("violet", [238, 130, 238]);
    m.insert("plum", [221, 160, 221]);
    m.insert("thistle", [216, 191, 216]);
    m.insert("lavender", [230, 230, 250]);

    m
});

/// Look up a named color (case-insensitive)
pub fn named_color(name: &str) -> Option<[u8; 3]> {
    NAMED_COLORS
        .get(name.to_ascii_lowercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color() {
        assert_eq!(named_color("red"), Some([255, 0, 0]));
        assert_eq!(named_color("RebeccaPurple"), Some([102, 51, 153]));
        assert_eq!(named_color("grey"), named_color("gray"));
        assert_eq!(named_color("notacolor"), None);
    }

    #[test]
    fn test_table_size() {
        assert_eq!(NAMED_COLORS.len(), 148);
    }

    #[test]
    fn test_keywords_not_in_table() {
        assert_eq!(named_color("transparent"), None);
        assert_eq!(named_color("currentcolor"), None);
    }
}
