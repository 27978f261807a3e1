//! Property registry
//!
//! Maps every recognised property name, vendor-prefixed forms included,
//! to the grammar its value must satisfy. Grammars are static data; most
//! are shared by several properties.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use cssvalues_parser::Node;

use crate::background::{bg_size_list, repeat_style_list};
use crate::color::is_color;
use crate::counter::is_counter_style;
use crate::filter::is_filter_function;
use crate::grammar::{Grammar, Leaf, List};
use crate::grid::is_track_size;
use crate::ident::{is_string, is_url};
use crate::image::check_image;
use crate::keyword::{
    is_box, is_line_style, is_line_width, ABSOLUTE_SIZES, ANIMATION_DIRECTIONS,
    ANIMATION_FILL_MODES, ANIMATION_PLAY_STATES, ATTACHMENTS, BLEND_MODES, COMPOSITE_STYLES,
    COMPOSITING_OPERATORS, MASKING_MODES, RELATIVE_SIZES,
};
use crate::numeric::{
    is_integer, is_length, is_length_percentage, is_number, is_percentage, is_time,
};
use crate::position::{position, position_list};
use crate::shadow::{box_shadow, text_shadow};
use crate::shape::{is_clip_source, is_geometry_box};
use crate::timing::{
    is_animateable_feature, is_animation_name, is_iteration_count, is_timing_function,
};
use crate::transform::is_transform_function;

const CONTENT_SIZES: &[&str] = &[
    "max-content",
    "min-content",
    "fit-content",
    "fill-available",
    "-webkit-max-content",
    "-moz-max-content",
    "-webkit-min-content",
    "-moz-min-content",
    "-webkit-fit-content",
    "-moz-fit-content",
    "-webkit-fill-available",
    "-moz-available",
];

const VERTICAL_ALIGNS: &[&str] = &[
    "baseline",
    "sub",
    "super",
    "text-top",
    "text-bottom",
    "middle",
    "top",
    "bottom",
];

const fn keywords(set: &'static [&'static str]) -> Grammar {
    Grammar::Single(Leaf::Keyword(set))
}

const fn single(test: fn(&Node) -> bool) -> Grammar {
    Grammar::Single(Leaf::Test(test))
}

/// One node matching any of the leaves
const fn either(leaves: &'static [Leaf]) -> Grammar {
    Grammar::Single(Leaf::Any(leaves))
}

const fn comma_list(item: Leaf) -> Grammar {
    Grammar::List(List::comma(item))
}

// Single values

static INTEGER: Grammar = single(is_integer);
static NUMBER: Grammar = single(is_number);
static LENGTH: Grammar = single(is_length);
static LENGTH_PERCENTAGE: Grammar = single(is_length_percentage);
static COLOR: Grammar = single(is_color);
static LINE_STYLE: Grammar = single(is_line_style);
static LINE_WIDTH: Grammar = single(is_line_width);
static TRACK_SIZE: Grammar = single(is_track_size);
static BLEND_MODE: Grammar = keywords(BLEND_MODES);

static OFFSET: Grammar = either(&[Leaf::Keyword(&["auto"]), Leaf::Test(is_length_percentage)]);
static LENGTH_OR_AUTO: Grammar = either(&[Leaf::Keyword(&["auto"]), Leaf::Test(is_length)]);
static LENGTH_OR_NORMAL: Grammar = either(&[Leaf::Keyword(&["normal"]), Leaf::Test(is_length)]);
static COLUMN_GAP: Grammar = either(&[Leaf::Keyword(&["normal"]), Leaf::Test(is_length)]);
static COLUMN_COUNT: Grammar = either(&[Leaf::Keyword(&["auto"]), Leaf::Test(is_number)]);
static PERSPECTIVE: Grammar = either(&[Leaf::Keyword(&["none"]), Leaf::Test(is_length)]);
static FONT_SIZE_ADJUST: Grammar = either(&[Leaf::Keyword(&["none"]), Leaf::Test(is_number)]);
static NONE_OR_URL: Grammar = either(&[Leaf::Keyword(&["none"]), Leaf::Test(is_url)]);
static NONE_OR_IMAGE: Grammar = either(&[Leaf::Keyword(&["none"]), Leaf::Check(check_image)]);
static CLIP_PATH: Grammar = either(&[Leaf::Keyword(&["none"]), Leaf::Test(is_clip_source)]);
static OUTLINE_COLOR: Grammar = either(&[Leaf::Keyword(&["invert"]), Leaf::Test(is_color)]);
static OUTLINE_STYLE: Grammar = either(&[Leaf::Keyword(&["auto"]), Leaf::Test(is_line_style)]);
static Z_INDEX: Grammar = either(&[Leaf::Keyword(&["auto"]), Leaf::Test(is_integer)]);
static TAB_SIZE: Grammar = either(&[Leaf::Test(is_length), Leaf::Test(is_integer)]);
static WORD_SPACING: Grammar = either(&[
    Leaf::Keyword(&["normal"]),
    Leaf::Test(is_length_percentage),
]);
static FONT_LANGUAGE_OVERRIDE: Grammar = either(&[
    Leaf::Keyword(&["normal"]),
    Leaf::Test(is_string),
]);
static TEXT_SIZE_ADJUST: Grammar = either(&[
    Leaf::Keyword(&["none", "auto"]),
    Leaf::Test(is_percentage),
]);
static SIZE_LIMIT: Grammar = either(&[
    Leaf::Keyword(&["none"]),
    Leaf::Keyword(CONTENT_SIZES),
    Leaf::Test(is_length_percentage),
]);
static SIZE: Grammar = either(&[
    Leaf::Keyword(&["auto"]),
    Leaf::Keyword(CONTENT_SIZES),
    Leaf::Test(is_length_percentage),
]);
static VERTICAL_ALIGN: Grammar = either(&[
    Leaf::Keyword(VERTICAL_ALIGNS),
    Leaf::Test(is_length_percentage),
]);
static FONT_SIZE: Grammar = either(&[
    Leaf::Test(is_length_percentage),
    Leaf::Keyword(RELATIVE_SIZES),
    Leaf::Keyword(ABSOLUTE_SIZES),
]);
static LINE_HEIGHT: Grammar = either(&[
    Leaf::Keyword(&["normal"]),
    Leaf::Test(is_length_percentage),
    Leaf::Test(is_number),
]);
static LIST_STYLE_TYPE: Grammar = either(&[
    Leaf::Keyword(&["none"]),
    Leaf::Test(is_string),
    Leaf::Test(is_counter_style),
]);

// Space separated

static LINE_STYLES: Grammar = Grammar::List(List::space(Leaf::Test(is_line_style)).max(4));
static LINE_WIDTHS: Grammar = Grammar::List(List::space(Leaf::Test(is_line_width)).max(4));
static COLORS: Grammar = Grammar::List(List::space(Leaf::Test(is_color)).max(4));
static RADIUS: Grammar = Grammar::List(List::space(Leaf::Test(is_length_percentage)).max(2));

static TRANSFORM: Grammar = Grammar::OneOf(&[
    Grammar::List(List::space(Leaf::Test(is_transform_function)).loose()),
    keywords(&["none"]),
]);
static FILTER: Grammar = Grammar::OneOf(&[
    Grammar::List(List::space(Leaf::Test(is_filter_function)).loose()),
    keywords(&["none"]),
]);
static GRID_TEMPLATE_AREAS: Grammar = Grammar::OneOf(&[
    keywords(&["none"]),
    Grammar::List(List::space(Leaf::Test(is_string))),
]);

// Comma separated

static COLOR_LIST: Grammar = comma_list(Leaf::Test(is_color));
static TIME_LIST: Grammar = comma_list(Leaf::Test(is_time));
static ATTACHMENT_LIST: Grammar = comma_list(Leaf::Keyword(ATTACHMENTS));
static COMPOSITE_STYLE_LIST: Grammar = comma_list(Leaf::Keyword(COMPOSITE_STYLES));
static COMPOSITING_LIST: Grammar = comma_list(Leaf::Keyword(COMPOSITING_OPERATORS));
static MASKING_MODE_LIST: Grammar = comma_list(Leaf::Keyword(MASKING_MODES));
static BLEND_MODE_LIST: Grammar = comma_list(Leaf::Keyword(BLEND_MODES));
static BOX_LIST: Grammar = comma_list(Leaf::Test(is_box));
static GEOMETRY_BOX_LIST: Grammar = comma_list(Leaf::Test(is_geometry_box));
static ANIMATION_DIRECTION_LIST: Grammar = comma_list(Leaf::Keyword(ANIMATION_DIRECTIONS));
static ANIMATION_FILL_MODE_LIST: Grammar = comma_list(Leaf::Keyword(ANIMATION_FILL_MODES));
static ANIMATION_PLAY_STATE_LIST: Grammar = comma_list(Leaf::Keyword(ANIMATION_PLAY_STATES));
static ANIMATION_NAME_LIST: Grammar = comma_list(Leaf::Test(is_animation_name));
static ITERATION_COUNT_LIST: Grammar = comma_list(Leaf::Test(is_iteration_count));
static TIMING_FUNCTION_LIST: Grammar = comma_list(Leaf::Test(is_timing_function));
static IMAGE_LIST: Grammar = comma_list(Leaf::Any(&[
    Leaf::Keyword(&["none"]),
    Leaf::Check(check_image),
]));
static WILL_CHANGE: Grammar = Grammar::OneOf(&[
    keywords(&["auto"]),
    comma_list(Leaf::Test(is_animateable_feature)),
]);

// Layered and composite values

static POSITION_LIST: Grammar = Grammar::Rule(position_list);
static SINGLE_POSITION: Grammar = Grammar::Rule(position);
static REPEAT_STYLE_LIST: Grammar = Grammar::Rule(repeat_style_list);
static BG_SIZE_LIST: Grammar = Grammar::Rule(bg_size_list);
static SCROLL_SNAP_COORDINATE: Grammar = Grammar::OneOf(&[
    Grammar::Rule(position_list),
    keywords(&["none"]),
]);
static TEXT_SHADOW: Grammar = Grammar::OneOf(&[Grammar::Rule(text_shadow), keywords(&["none"])]);
static BOX_SHADOW: Grammar = Grammar::OneOf(&[Grammar::Rule(box_shadow), keywords(&["none"])]);

// Keyword sets

static MOZ_APPEARANCE: Grammar = keywords(&[
    "none",
    "button",
    "button-arrow-down",
    "button-arrow-next",
    "button-arrow-previous",
    "button-arrow-up",
    "button-bevel",
    "button-focus",
    "caret",
    "checkbox",
    "checkbox-container",
    "checkbox-label",
    "checkmenuitem",
    "dualbutton",
    "groupbox",
    "listbox",
    "listitem",
    "menuarrow",
    "menubar",
    "menucheckbox",
    "menuimage",
    "menuitem",
    "menuitemtext",
    "menulist",
    "menulist-button",
    "menulist-text",
    "menulist-textfield",
    "menupopup",
    "menuradio",
    "menuseparator",
    "meterbar",
    "meterchunk",
    "progressbar",
    "progressbar-vertical",
    "progresschunk",
    "progresschunk-vertical",
    "radio",
    "radio-container",
    "radio-label",
    "radiomenuitem",
    "range",
    "range-thumb",
    "resizer",
    "resizerpanel",
    "scale-horizontal",
    "scalethumbend",
    "scalethumb-horizontal",
    "scalethumbstart",
    "scalethumbtick",
    "scalethumb-vertical",
    "scale-vertical",
    "scrollbarbutton-down",
    "scrollbarbutton-left",
    "scrollbarbutton-right",
    "scrollbarbutton-up",
    "scrollbarthumb-horizontal",
    "scrollbarthumb-vertical",
    "scrollbartrack-horizontal",
    "scrollbartrack-vertical",
    "searchfield",
    "separator",
    "sheet",
    "spinner",
    "spinner-downbutton",
    "spinner-textfield",
    "spinner-upbutton",
    "splitter",
    "statusbar",
    "statusbarpanel",
    "tab",
    "tabpanel",
    "tabpanels",
    "tab-scroll-arrow-back",
    "tab-scroll-arrow-forward",
    "textfield",
    "textfield-multiline",
    "toolbar",
    "toolbarbutton",
    "toolbarbutton-dropdown",
    "toolbargripper",
    "toolbox",
    "tooltip",
    "treeheader",
    "treeheadercell",
    "treeheadersortarrow",
    "treeitem",
    "treeline",
    "treetwisty",
    "treetwistyopen",
    "treeview",
    "-moz-mac-unified-toolbar",
    "-moz-win-borderless-glass",
    "-moz-win-browsertabbar-toolbox",
    "-moz-win-communicationstext",
    "-moz-win-communications-toolbox",
    "-moz-win-exclude-glass",
    "-moz-win-glass",
    "-moz-win-mediatext",
    "-moz-win-media-toolbox",
    "-moz-window-button-box",
    "-moz-window-button-box-maximized",
    "-moz-window-button-close",
    "-moz-window-button-maximize",
    "-moz-window-button-minimize",
    "-moz-window-button-restore",
    "-moz-window-frame-bottom",
    "-moz-window-frame-left",
    "-moz-window-frame-right",
    "-moz-window-titlebar",
    "-moz-window-titlebar-maximized",
]);
static BACKFACE_VISIBILITY: Grammar = keywords(&["visible", "hidden"]);
static BOX_ALIGN_PREFIXED: Grammar = keywords(&[
    "flex-start",
    "flex-end",
    "center",
    "baseline",
    "stretch",
    "start",
    "end",
]);
static BOX_DIRECTION_PREFIXED: Grammar = keywords(&[
    "row",
    "row-reverse",
    "column",
    "column-reverse",
    "normal",
    "reverse",
]);
static BOX_ORIENT_PREFIXED: Grammar = keywords(&[
    "row",
    "row-reverse",
    "column",
    "column-reverse",
    "horizontal",
    "vertical",
]);
static BOX_PACK_PREFIXED: Grammar = keywords(&[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
    "start",
    "end",
    "justify",
]);
static BOX_SIZING: Grammar = keywords(&["content-box", "border-box"]);
static COLUMN_FILL: Grammar = keywords(&["auto", "balance"]);
static COLUMN_SPAN: Grammar = keywords(&["none", "all"]);
static MOZ_FLOAT_EDGE: Grammar = keywords(&[
    "border-box",
    "content-box",
    "margin-box",
    "padding-box",
]);
static FONT_KERNING: Grammar = keywords(&["auto", "normal", "none"]);
static HYPHENS: Grammar = keywords(&["none", "manual", "auto"]);
static MOZ_ORIENT: Grammar = keywords(&["inline", "block", "horizontal", "vertical"]);
static MOZ_STACK_SIZING: Grammar = keywords(&["ignore", "stretch-to-fit"]);
static TEXT_ALIGN_LAST: Grammar = keywords(&[
    "auto",
    "start",
    "end",
    "left",
    "right",
    "center",
    "justify",
]);
static MOZ_TEXT_BLINK: Grammar = keywords(&["none", "blink"]);
static TEXT_DECORATION_STYLE: Grammar = keywords(&["solid", "double", "dotted", "dashed", "wavy"]);
static TRANSFORM_STYLE: Grammar = keywords(&["flat", "preserve-3d"]);
static MOZ_USER_FOCUS: Grammar = keywords(&[
    "ignore",
    "normal",
    "select-after",
    "select-before",
    "select-menu",
    "select-same",
    "select-all",
    "none",
]);
static MOZ_USER_INPUT: Grammar = keywords(&["none", "enabled", "disabled"]);
static MOZ_USER_MODIFY: Grammar = keywords(&["read-only", "read-write", "write-only"]);
static USER_SELECT: Grammar = keywords(&["auto", "text", "none", "contain", "all"]);
static MOZ_WINDOW_SHADOW: Grammar = keywords(&["default", "menu", "tooltip", "sheet", "none"]);
static FLEX_DIRECTION: Grammar = keywords(&["row", "row-reverse", "column", "column-reverse"]);
static MS_FLEX_ITEM_ALIGN: Grammar = keywords(&[
    "auto",
    "flex-start",
    "flex-end",
    "center",
    "baseline",
    "stretch",
    "start",
    "end",
]);
static MS_FLEX_LINE_PACK: Grammar = keywords(&[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
    "stretch",
    "start",
    "end",
    "justify",
    "distribute",
]);
static MS_FLEX_PACK: Grammar = keywords(&[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
    "start",
    "end",
    "justify",
    "distribute",
]);
static FLEX_WRAP: Grammar = keywords(&["nowrap", "wrap", "wrap-reverse"]);
static ALIGN_ITEMS: Grammar = keywords(&[
    "flex-start",
    "flex-end",
    "center",
    "baseline",
    "stretch",
]);
static MS_INTERPOLATION_MODE: Grammar = keywords(&[
    "auto",
    "crisp-edges",
    "pixelated",
    "nearest-neighbor",
]);
static MS_OVERFLOW_STYLE: Grammar = keywords(&[
    "auto",
    "none",
    "scrollbar",
    "-ms-autohiding-scrollbar",
]);
static SCROLL_SNAP_TYPE: Grammar = keywords(&["none", "mandatory", "proximity"]);
static MS_WRITING_MODE: Grammar = keywords(&[
    "horizontal-tb",
    "vertical-rl",
    "vertical-lr",
    "sideways-rl",
    "sideways-lr",
    "lr-tb",
    "tb-rl",
    "tb-lr",
]);
static OBJECT_FIT: Grammar = keywords(&["fill", "contain", "cover", "none", "scale-down"]);
static ALIGN_CONTENT: Grammar = keywords(&[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
    "stretch",
]);
static ALIGN_SELF: Grammar = keywords(&[
    "auto",
    "flex-start",
    "flex-end",
    "center",
    "baseline",
    "stretch",
]);
static APPEARANCE: Grammar = keywords(&["auto", "none"]);
static BOX_DECORATION_BREAK: Grammar = keywords(&["slice", "clone"]);
static BREAK_INSIDE: Grammar = keywords(&[
    "auto",
    "avoid",
    "avoid-page",
    "avoid-column",
    "avoid-region",
]);
static JUSTIFY_CONTENT: Grammar = keywords(&[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
]);
static REPEAT_AXIS: Grammar = keywords(&["repeat", "no-repeat", "space", "round"]);
static WEBKIT_TOUCH_CALLOUT: Grammar = keywords(&["default", "none"]);
static WRITING_MODE: Grammar = keywords(&[
    "horizontal-tb",
    "vertical-rl",
    "vertical-lr",
    "sideways-rl",
    "sideways-lr",
]);
static BORDER_COLLAPSE: Grammar = keywords(&["collapse", "separate"]);
static BOX_ALIGN: Grammar = keywords(&["start", "center", "end", "baseline", "stretch"]);
static BOX_DIRECTION: Grammar = keywords(&["normal", "reverse", "inherit"]);
static BOX_LINES: Grammar = keywords(&["single", "multiple"]);
static BOX_ORIENT: Grammar = keywords(&[
    "horizontal",
    "vertical",
    "inline-axis",
    "block-axis",
    "inherit",
]);
static BOX_PACK: Grammar = keywords(&["start", "center", "end", "justify"]);
static BOX_SUPPRESS: Grammar = keywords(&["show", "discard", "hide"]);
static CAPTION_SIDE: Grammar = keywords(&[
    "top",
    "bottom",
    "block-start",
    "block-end",
    "inline-start",
    "inline-end",
]);
static CLEAR: Grammar = keywords(&["none", "left", "right", "both", "inline-start", "inline-end"]);
static DIRECTION: Grammar = keywords(&["ltr", "rtl"]);
static DISPLAY: Grammar = keywords(&[
    "none",
    "inline",
    "block",
    "list-item",
    "inline-list-item",
    "inline-block",
    "inline-table",
    "table",
    "table-cell",
    "table-column",
    "table-column-group",
    "table-footer-group",
    "table-header-group",
    "table-row",
    "table-row-group",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "run-in",
    "ruby",
    "ruby-base",
    "ruby-text",
    "ruby-base-container",
    "ruby-text-container",
    "contents",
    "-webkit-box",
    "-webkit-flex",
    "-moz-box",
    "-ms-flexbox",
    "-webkit-inline-box",
    "-webkit-inline-flex",
    "-moz-inline-box",
    "-ms-inline-flexbox",
    "-ms-grid",
    "-ms-inline-grid",
]);
static DISPLAY_INSIDE: Grammar = keywords(&["auto", "block", "table", "flex", "grid", "ruby"]);
static DISPLAY_LIST: Grammar = keywords(&["none", "list-item"]);
static DISPLAY_OUTSIDE: Grammar = keywords(&[
    "block-level",
    "inline-level",
    "run-in",
    "contents",
    "none",
    "table-row-group",
    "table-header-group",
    "table-footer-group",
    "table-row",
    "table-cell",
    "table-column-group",
    "table-column",
    "table-caption",
    "ruby-base",
    "ruby-text",
    "ruby-base-container",
    "ruby-text-container",
]);
static EMPTY_CELLS: Grammar = keywords(&["show", "hide"]);
static FLOAT: Grammar = keywords(&["left", "right", "none", "inline-start", "inline-end"]);
static FONT_STRETCH: Grammar = keywords(&[
    "normal",
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
]);
static FONT_STYLE: Grammar = keywords(&["normal", "italic", "oblique"]);
static FONT_VARIANT_CAPS: Grammar = keywords(&[
    "normal",
    "small-caps",
    "all-small-caps",
    "petite-caps",
    "all-petite-caps",
    "unicase",
    "titling-caps",
]);
static FONT_VARIANT_POSITION: Grammar = keywords(&["normal", "sub", "super"]);
static FONT_WEIGHT: Grammar = keywords(&[
    "normal",
    "bold",
    "bolder",
    "lighter",
    "100",
    "200",
    "300",
    "400",
    "500",
    "600",
    "700",
    "800",
    "900",
]);
static IMAGE_RENDERING: Grammar = keywords(&[
    "auto",
    "crisp-edges",
    "pixelated",
    "-webkit-optimize-contrast",
    "-moz-crisp-edges",
    "-o-pixelated",
]);
static IME_MODE: Grammar = keywords(&["auto", "normal", "active", "inactive", "disabled"]);
static INITIAL_LETTER_ALIGN: Grammar = keywords(&["auto", "alphabetic", "hanging", "ideographic"]);
static ISOLATION: Grammar = keywords(&["auto", "isolate"]);
static LINE_BREAK: Grammar = keywords(&["auto", "loose", "normal", "strict"]);
static LIST_STYLE_POSITION: Grammar = keywords(&["inside", "outside"]);
static MASK_TYPE: Grammar = keywords(&["luminance", "alpha"]);
static OVERFLOW: Grammar = keywords(&["visible", "hidden", "scroll", "auto"]);
static OVERFLOW_CLIP_BOX: Grammar = keywords(&["padding-box", "content-box"]);
static OVERFLOW_WRAP: Grammar = keywords(&["normal", "break-word"]);
static PAGE_BREAK_AFTER: Grammar = keywords(&["auto", "always", "avoid", "left", "right"]);
static POINTER_EVENTS: Grammar = keywords(&[
    "auto",
    "none",
    "visiblePainted",
    "visibleFill",
    "visibleStroke",
    "visible",
    "painted",
    "fill",
    "stroke",
    "all",
    "inherit",
]);
static POSITION: Grammar = keywords(&[
    "static",
    "relative",
    "absolute",
    "sticky",
    "fixed",
    "-webkit-sticky",
]);
static RESIZE: Grammar = keywords(&["none", "both", "horizontal", "vertical"]);
static RUBY_ALIGN: Grammar = keywords(&["start", "center", "space-between", "space-around"]);
static RUBY_MERGE: Grammar = keywords(&["separate", "collapse", "auto"]);
static RUBY_POSITION: Grammar = keywords(&["over", "under", "inter-character"]);
static SCROLL_BEHAVIOR: Grammar = keywords(&["auto", "smooth"]);
static TABLE_LAYOUT: Grammar = keywords(&["auto", "fixed"]);
static TEXT_ALIGN: Grammar = keywords(&[
    "start",
    "end",
    "left",
    "right",
    "center",
    "justify",
    "match-parent",
]);
static TEXT_ORIENTATION: Grammar = keywords(&["mixed", "upright", "sideways"]);
static TEXT_RENDERING: Grammar = keywords(&[
    "auto",
    "optimizeSpeed",
    "optimizeLegibility",
    "geometricPrecision",
]);
static TEXT_TRANSFORM: Grammar = keywords(&[
    "none",
    "capitalize",
    "uppercase",
    "lowercase",
    "full-width",
]);
static TRANSFORM_BOX: Grammar = keywords(&["border-box", "fill-box", "view-box"]);
static UNICODE_BIDI: Grammar = keywords(&[
    "normal",
    "embed",
    "isolate",
    "bidi-override",
    "isolate-override",
    "plaintext",
]);
static VISIBILITY: Grammar = keywords(&["visible", "hidden", "collapse"]);
static WHITE_SPACE: Grammar = keywords(&["normal", "pre", "nowrap", "pre-wrap", "pre-line"]);
static WORD_BREAK: Grammar = keywords(&["normal", "break-all", "keep-all"]);

/// Property name -> grammar
static REGISTRY: LazyLock<FxHashMap<&'static str, &'static Grammar>> = LazyLock::new(|| {
    let mut m: FxHashMap<&'static str, &'static Grammar> = FxHashMap::default();

    m.insert("-moz-appearance", &MOZ_APPEARANCE);

    m.insert("-moz-backface-visibility", &BACKFACE_VISIBILITY);
    m.insert("-webkit-backface-visibility", &BACKFACE_VISIBILITY);
    m.insert("backface-visibility", &BACKFACE_VISIBILITY);

    m.insert("-moz-binding", &NONE_OR_URL);
    m.insert("list-style-image", &NONE_OR_URL);

    m.insert("-moz-box-align", &BOX_ALIGN_PREFIXED);
    m.insert("-ms-flex-align", &BOX_ALIGN_PREFIXED);
    m.insert("-webkit-box-align", &BOX_ALIGN_PREFIXED);

    m.insert("-moz-box-direction", &BOX_DIRECTION_PREFIXED);
    m.insert("-webkit-box-direction", &BOX_DIRECTION_PREFIXED);

    m.insert("-moz-box-orient", &BOX_ORIENT_PREFIXED);
    m.insert("-webkit-box-orient", &BOX_ORIENT_PREFIXED);

    m.insert("-moz-box-pack", &BOX_PACK_PREFIXED);
    m.insert("-webkit-box-pack", &BOX_PACK_PREFIXED);

    m.insert("-moz-box-sizing", &BOX_SIZING);
    m.insert("-webkit-box-sizing", &BOX_SIZING);
    m.insert("box-sizing", &BOX_SIZING);

    m.insert("-moz-column-count", &COLUMN_COUNT);
    m.insert("-webkit-column-count", &COLUMN_COUNT);
    m.insert("column-count", &COLUMN_COUNT);

    m.insert("-moz-column-fill", &COLUMN_FILL);
    m.insert("-webkit-column-fill", &COLUMN_FILL);
    m.insert("column-fill", &COLUMN_FILL);

    m.insert("-moz-column-gap", &COLUMN_GAP);
    m.insert("-webkit-column-gap", &COLUMN_GAP);
    m.insert("column-gap", &COLUMN_GAP);

    m.insert("-moz-column-span", &COLUMN_SPAN);
    m.insert("-webkit-column-span", &COLUMN_SPAN);
    m.insert("column-span", &COLUMN_SPAN);

    m.insert("-moz-column-width", &LENGTH_OR_AUTO);
    m.insert("-webkit-column-width", &LENGTH_OR_AUTO);
    m.insert("column-width", &LENGTH_OR_AUTO);
    m.insert("marker-offset", &LENGTH_OR_AUTO);

    m.insert("-moz-float-edge", &MOZ_FLOAT_EDGE);

    m.insert("-moz-font-kerning", &FONT_KERNING);
    m.insert("-webkit-font-kerning", &FONT_KERNING);
    m.insert("font-kerning", &FONT_KERNING);

    m.insert("-moz-font-language-override", &FONT_LANGUAGE_OVERRIDE);
    m.insert("-webkit-font-language-override", &FONT_LANGUAGE_OVERRIDE);
    m.insert("font-language-override", &FONT_LANGUAGE_OVERRIDE);

    m.insert("-moz-force-broken-image-icon", &INTEGER);
    m.insert("box-flex-group", &INTEGER);
    m.insert("box-ordinal-group", &INTEGER);
    m.insert("order", &INTEGER);
    m.insert("orphans", &INTEGER);
    m.insert("widows", &INTEGER);

    m.insert("-moz-hyphens", &HYPHENS);
    m.insert("-ms-hyphens", &HYPHENS);
    m.insert("-webkit-hyphens", &HYPHENS);
    m.insert("hyphens", &HYPHENS);

    m.insert("-moz-margin-end", &OFFSET);
    m.insert("-moz-margin-start", &OFFSET);
    m.insert("-webkit-margin-after", &OFFSET);
    m.insert("-webkit-margin-before", &OFFSET);
    m.insert("-webkit-margin-end", &OFFSET);
    m.insert("-webkit-margin-start", &OFFSET);
    m.insert("bottom", &OFFSET);
    m.insert("left", &OFFSET);
    m.insert("margin-block-end", &OFFSET);
    m.insert("margin-block-start", &OFFSET);
    m.insert("margin-bottom", &OFFSET);
    m.insert("margin-inline-end", &OFFSET);
    m.insert("margin-inline-start", &OFFSET);
    m.insert("margin-left", &OFFSET);
    m.insert("margin-right", &OFFSET);
    m.insert("margin-top", &OFFSET);
    m.insert("offset-block-end", &OFFSET);
    m.insert("offset-block-start", &OFFSET);
    m.insert("offset-inline-end", &OFFSET);
    m.insert("offset-inline-start", &OFFSET);
    m.insert("right", &OFFSET);
    m.insert("top", &OFFSET);

    m.insert("-moz-orient", &MOZ_ORIENT);

    m.insert("-moz-perspective", &PERSPECTIVE);
    m.insert("-webkit-perspective", &PERSPECTIVE);
    m.insert("perspective", &PERSPECTIVE);

    m.insert("-moz-stack-sizing", &MOZ_STACK_SIZING);

    m.insert("-moz-text-align-last", &TEXT_ALIGN_LAST);
    m.insert("text-align-last", &TEXT_ALIGN_LAST);

    m.insert("-moz-text-blink", &MOZ_TEXT_BLINK);

    m.insert("-moz-text-decoration-style", &TEXT_DECORATION_STYLE);
    m.insert("-webkit-text-decoration-style", &TEXT_DECORATION_STYLE);
    m.insert("text-decoration-style", &TEXT_DECORATION_STYLE);

    m.insert("-moz-text-size-adjust", &TEXT_SIZE_ADJUST);
    m.insert("-ms-text-size-adjust", &TEXT_SIZE_ADJUST);
    m.insert("-webkit-text-size-adjust", &TEXT_SIZE_ADJUST);
    m.insert("text-size-adjust", &TEXT_SIZE_ADJUST);

    m.insert("-moz-transform", &TRANSFORM);
    m.insert("-ms-transform", &TRANSFORM);
    m.insert("-o-transform", &TRANSFORM);
    m.insert("-webkit-transform", &TRANSFORM);
    m.insert("transform", &TRANSFORM);

    m.insert("-moz-transform-style", &TRANSFORM_STYLE);
    m.insert("-webkit-transform-style", &TRANSFORM_STYLE);
    m.insert("transform-style", &TRANSFORM_STYLE);

    m.insert("-moz-user-focus", &MOZ_USER_FOCUS);

    m.insert("-moz-user-input", &MOZ_USER_INPUT);

    m.insert("-moz-user-modify", &MOZ_USER_MODIFY);

    m.insert("-moz-user-select", &USER_SELECT);
    m.insert("-ms-user-select", &USER_SELECT);
    m.insert("-webkit-user-select", &USER_SELECT);
    m.insert("user-select", &USER_SELECT);

    m.insert("-moz-window-shadow", &MOZ_WINDOW_SHADOW);

    m.insert("-ms-flex-direction", &FLEX_DIRECTION);
    m.insert("-webkit-flex-direction", &FLEX_DIRECTION);
    m.insert("flex-direction", &FLEX_DIRECTION);

    m.insert("-ms-flex-item-align", &MS_FLEX_ITEM_ALIGN);

    m.insert("-ms-flex-line-pack", &MS_FLEX_LINE_PACK);

    m.insert("-ms-flex-pack", &MS_FLEX_PACK);

    m.insert("-ms-flex-wrap", &FLEX_WRAP);
    m.insert("-webkit-flex-wrap", &FLEX_WRAP);
    m.insert("flex-wrap", &FLEX_WRAP);

    m.insert("-ms-grid-row-align", &ALIGN_ITEMS);
    m.insert("-webkit-align-items", &ALIGN_ITEMS);
    m.insert("align-items", &ALIGN_ITEMS);

    m.insert("-ms-interpolation-mode", &MS_INTERPOLATION_MODE);

    m.insert("-ms-overflow-style", &MS_OVERFLOW_STYLE);

    m.insert("-ms-scroll-snap-coordinate", &SCROLL_SNAP_COORDINATE);
    m.insert("-webkit-scroll-snap-coordinate", &SCROLL_SNAP_COORDINATE);
    m.insert("scroll-snap-coordinate", &SCROLL_SNAP_COORDINATE);

    m.insert("-ms-scroll-snap-type", &SCROLL_SNAP_TYPE);
    m.insert("-webkit-scroll-snap-type", &SCROLL_SNAP_TYPE);
    m.insert("scroll-snap-type", &SCROLL_SNAP_TYPE);
    m.insert("scroll-snap-type-x", &SCROLL_SNAP_TYPE);
    m.insert("scroll-snap-type-y", &SCROLL_SNAP_TYPE);

    m.insert("-ms-writing-mode", &MS_WRITING_MODE);

    m.insert("-o-object-fit", &OBJECT_FIT);
    m.insert("object-fit", &OBJECT_FIT);

    m.insert("-webkit-align-content", &ALIGN_CONTENT);
    m.insert("align-content", &ALIGN_CONTENT);

    m.insert("-webkit-align-self", &ALIGN_SELF);
    m.insert("align-self", &ALIGN_SELF);

    m.insert("-webkit-appearance", &APPEARANCE);
    m.insert("appearance", &APPEARANCE);

    m.insert("-webkit-backdrop-filter", &FILTER);
    m.insert("-webkit-filter", &FILTER);
    m.insert("backdrop-filter", &FILTER);
    m.insert("filter", &FILTER);

    m.insert("-webkit-border-before-color", &COLOR);
    m.insert("-webkit-text-fill-color", &COLOR);
    m.insert("-webkit-text-stroke-color", &COLOR);
    m.insert("background-color", &COLOR);
    m.insert("border-block-end-color", &COLOR);
    m.insert("border-block-start-color", &COLOR);
    m.insert("border-bottom-color", &COLOR);
    m.insert("border-inline-end-color", &COLOR);
    m.insert("border-inline-start-color", &COLOR);
    m.insert("border-left-color", &COLOR);
    m.insert("border-right-color", &COLOR);
    m.insert("border-top-color", &COLOR);
    m.insert("color", &COLOR);
    m.insert("column-rule-color", &COLOR);
    m.insert("text-decoration-color", &COLOR);
    m.insert("text-emphasis-color", &COLOR);

    m.insert("-webkit-border-before-style", &LINE_STYLES);
    m.insert("border-block-end-style", &LINE_STYLES);
    m.insert("border-block-start-style", &LINE_STYLES);
    m.insert("border-inline-end-style", &LINE_STYLES);
    m.insert("border-inline-start-style", &LINE_STYLES);
    m.insert("border-style", &LINE_STYLES);

    m.insert("-webkit-border-before-width", &LINE_WIDTHS);
    m.insert("border-block-end-width", &LINE_WIDTHS);
    m.insert("border-block-start-width", &LINE_WIDTHS);
    m.insert("border-inline-end-width", &LINE_WIDTHS);
    m.insert("border-inline-start-width", &LINE_WIDTHS);
    m.insert("border-width", &LINE_WIDTHS);

    m.insert("-webkit-box-decoration-break", &BOX_DECORATION_BREAK);
    m.insert("box-decoration-break", &BOX_DECORATION_BREAK);

    m.insert("-webkit-clip-path", &CLIP_PATH);
    m.insert("clip-path", &CLIP_PATH);

    m.insert("-webkit-column-break-inside", &BREAK_INSIDE);
    m.insert("break-inside", &BREAK_INSIDE);
    m.insert("page-break-inside", &BREAK_INSIDE);

    m.insert("-webkit-justify-content", &JUSTIFY_CONTENT);
    m.insert("justify-content", &JUSTIFY_CONTENT);

    m.insert("-webkit-mask-attachment", &ATTACHMENT_LIST);
    m.insert("background-attachment", &ATTACHMENT_LIST);

    m.insert("-webkit-mask-composite", &COMPOSITE_STYLE_LIST);

    m.insert("-webkit-mask-position", &POSITION_LIST);
    m.insert("background-position", &POSITION_LIST);
    m.insert("mask-position", &POSITION_LIST);

    m.insert("-webkit-mask-repeat", &REPEAT_STYLE_LIST);
    m.insert("background-repeat", &REPEAT_STYLE_LIST);
    m.insert("mask-repeat", &REPEAT_STYLE_LIST);

    m.insert("-webkit-mask-repeat-x", &REPEAT_AXIS);
    m.insert("-webkit-mask-repeat-y", &REPEAT_AXIS);

    m.insert("-webkit-tap-highlight-color", &COLOR_LIST);

    m.insert("-webkit-text-stroke-width", &LENGTH);
    m.insert("outline-offset", &LENGTH);

    m.insert("-webkit-touch-callout", &WEBKIT_TOUCH_CALLOUT);

    m.insert("-webkit-writing-mode", &WRITING_MODE);
    m.insert("writing-mode", &WRITING_MODE);

    m.insert("animation-delay", &TIME_LIST);
    m.insert("animation-duration", &TIME_LIST);
    m.insert("transition-delay", &TIME_LIST);
    m.insert("transition-duration", &TIME_LIST);

    m.insert("animation-direction", &ANIMATION_DIRECTION_LIST);

    m.insert("animation-fill-mode", &ANIMATION_FILL_MODE_LIST);

    m.insert("animation-iteration-count", &ITERATION_COUNT_LIST);

    m.insert("animation-name", &ANIMATION_NAME_LIST);

    m.insert("animation-play-state", &ANIMATION_PLAY_STATE_LIST);

    m.insert("animation-timing-function", &TIMING_FUNCTION_LIST);
    m.insert("transition-timing-function", &TIMING_FUNCTION_LIST);

    m.insert("background-blend-mode", &BLEND_MODE_LIST);

    m.insert("background-clip", &BOX_LIST);
    m.insert("background-origin", &BOX_LIST);

    m.insert("background-image", &IMAGE_LIST);

    m.insert("background-size", &BG_SIZE_LIST);
    m.insert("mask-size", &BG_SIZE_LIST);

    m.insert("border-bottom-left-radius", &RADIUS);
    m.insert("border-bottom-right-radius", &RADIUS);
    m.insert("border-top-left-radius", &RADIUS);
    m.insert("border-top-right-radius", &RADIUS);

    m.insert("border-bottom-style", &LINE_STYLE);
    m.insert("border-left-style", &LINE_STYLE);
    m.insert("border-right-style", &LINE_STYLE);
    m.insert("border-top-style", &LINE_STYLE);
    m.insert("column-rule-style", &LINE_STYLE);

    m.insert("border-bottom-width", &LINE_WIDTH);
    m.insert("border-left-width", &LINE_WIDTH);
    m.insert("border-right-width", &LINE_WIDTH);
    m.insert("border-top-width", &LINE_WIDTH);
    m.insert("column-rule-width", &LINE_WIDTH);
    m.insert("outline-width", &LINE_WIDTH);

    m.insert("border-collapse", &BORDER_COLLAPSE);

    m.insert("border-color", &COLORS);

    m.insert("border-image-source", &NONE_OR_IMAGE);

    m.insert("box-align", &BOX_ALIGN);

    m.insert("box-direction", &BOX_DIRECTION);

    m.insert("box-flex", &NUMBER);
    m.insert("flex-grow", &NUMBER);
    m.insert("flex-shrink", &NUMBER);
    m.insert("opacity", &NUMBER);
    m.insert("shape-image-threshold", &NUMBER);

    m.insert("box-lines", &BOX_LINES);

    m.insert("box-orient", &BOX_ORIENT);

    m.insert("box-pack", &BOX_PACK);

    m.insert("box-suppress", &BOX_SUPPRESS);

    m.insert("caption-side", &CAPTION_SIDE);

    m.insert("clear", &CLEAR);

    m.insert("direction", &DIRECTION);

    m.insert("display", &DISPLAY);

    m.insert("display-inside", &DISPLAY_INSIDE);

    m.insert("display-list", &DISPLAY_LIST);

    m.insert("display-outside", &DISPLAY_OUTSIDE);

    m.insert("empty-cells", &EMPTY_CELLS);

    m.insert("float", &FLOAT);

    m.insert("font-size", &FONT_SIZE);

    m.insert("font-size-adjust", &FONT_SIZE_ADJUST);

    m.insert("font-stretch", &FONT_STRETCH);

    m.insert("font-style", &FONT_STYLE);

    m.insert("font-variant-caps", &FONT_VARIANT_CAPS);

    m.insert("font-variant-position", &FONT_VARIANT_POSITION);

    m.insert("font-weight", &FONT_WEIGHT);

    m.insert("grid-auto-columns", &TRACK_SIZE);
    m.insert("grid-auto-rows", &TRACK_SIZE);

    m.insert("grid-column-gap", &LENGTH_PERCENTAGE);
    m.insert("grid-row-gap", &LENGTH_PERCENTAGE);
    m.insert("motion-offset", &LENGTH_PERCENTAGE);
    m.insert("padding-block-end", &LENGTH_PERCENTAGE);
    m.insert("padding-block-start", &LENGTH_PERCENTAGE);
    m.insert("padding-bottom", &LENGTH_PERCENTAGE);
    m.insert("padding-inline-end", &LENGTH_PERCENTAGE);
    m.insert("padding-inline-start", &LENGTH_PERCENTAGE);
    m.insert("padding-left", &LENGTH_PERCENTAGE);
    m.insert("padding-right", &LENGTH_PERCENTAGE);
    m.insert("padding-top", &LENGTH_PERCENTAGE);
    m.insert("shape-margin", &LENGTH_PERCENTAGE);

    m.insert("grid-template-areas", &GRID_TEMPLATE_AREAS);

    m.insert("image-rendering", &IMAGE_RENDERING);

    m.insert("ime-mode", &IME_MODE);

    m.insert("initial-letter-align", &INITIAL_LETTER_ALIGN);

    m.insert("isolation", &ISOLATION);

    m.insert("letter-spacing", &LENGTH_OR_NORMAL);

    m.insert("line-break", &LINE_BREAK);

    m.insert("line-height", &LINE_HEIGHT);

    m.insert("list-style-position", &LIST_STYLE_POSITION);

    m.insert("list-style-type", &LIST_STYLE_TYPE);

    m.insert("mask-composite", &COMPOSITING_LIST);

    m.insert("mask-image", &IMAGE_LIST);

    m.insert("mask-mode", &MASKING_MODE_LIST);

    m.insert("mask-origin", &GEOMETRY_BOX_LIST);

    m.insert("mask-type", &MASK_TYPE);

    m.insert("width", &SIZE);
    m.insert("height", &SIZE);
    m.insert("block-size", &SIZE);
    m.insert("inline-size", &SIZE);

    m.insert("max-block-size", &SIZE_LIMIT);
    m.insert("max-height", &SIZE_LIMIT);
    m.insert("max-inline-size", &SIZE_LIMIT);
    m.insert("max-width", &SIZE_LIMIT);
    m.insert("min-block-size", &SIZE_LIMIT);
    m.insert("min-height", &SIZE_LIMIT);
    m.insert("min-inline-size", &SIZE_LIMIT);
    m.insert("min-width", &SIZE_LIMIT);

    m.insert("mix-blend-mode", &BLEND_MODE);

    m.insert("object-position", &SINGLE_POSITION);
    m.insert("perspective-origin", &SINGLE_POSITION);
    m.insert("scroll-snap-destination", &SINGLE_POSITION);

    m.insert("outline-color", &OUTLINE_COLOR);

    m.insert("outline-style", &OUTLINE_STYLE);

    m.insert("overflow", &OVERFLOW);
    m.insert("overflow-x", &OVERFLOW);
    m.insert("overflow-y", &OVERFLOW);

    m.insert("overflow-clip-box", &OVERFLOW_CLIP_BOX);

    m.insert("overflow-wrap", &OVERFLOW_WRAP);
    m.insert("word-wrap", &OVERFLOW_WRAP);

    m.insert("page-break-after", &PAGE_BREAK_AFTER);
    m.insert("page-break-before", &PAGE_BREAK_AFTER);

    m.insert("pointer-events", &POINTER_EVENTS);

    m.insert("position", &POSITION);

    m.insert("resize", &RESIZE);

    m.insert("ruby-align", &RUBY_ALIGN);

    m.insert("ruby-merge", &RUBY_MERGE);

    m.insert("ruby-position", &RUBY_POSITION);

    m.insert("scroll-behavior", &SCROLL_BEHAVIOR);

    m.insert("tab-size", &TAB_SIZE);

    m.insert("table-layout", &TABLE_LAYOUT);

    m.insert("text-align", &TEXT_ALIGN);

    m.insert("text-orientation", &TEXT_ORIENTATION);

    m.insert("text-rendering", &TEXT_RENDERING);

    m.insert("text-shadow", &TEXT_SHADOW);
    m.insert("box-shadow", &BOX_SHADOW);

    m.insert("text-transform", &TEXT_TRANSFORM);

    m.insert("transform-box", &TRANSFORM_BOX);

    m.insert("unicode-bidi", &UNICODE_BIDI);

    m.insert("vertical-align", &VERTICAL_ALIGN);

    m.insert("visibility", &VISIBILITY);

    m.insert("white-space", &WHITE_SPACE);

    m.insert("will-change", &WILL_CHANGE);

    m.insert("word-break", &WORD_BREAK);

    m.insert("word-spacing", &WORD_SPACING);

    m.insert("z-index", &Z_INDEX);
    m
});

/// Look up the grammar for a property (exact, case-sensitive)
pub fn grammar_for(property: &str) -> Option<&'static Grammar> {
    REGISTRY.get(property).copied()
}

/// All recognised property names, in no particular order
pub fn known_properties() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}
