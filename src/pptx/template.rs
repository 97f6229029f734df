//! Static presentation parts.
//!
//! Minimal valid master, layout, theme and property parts required for a
//! standalone .pptx package, modeled on the python-pptx default template.
//! The resources are authored pre-minified.

/// Slide master with title/body placeholders and the layout ID list.
pub(crate) fn slide_master_xml() -> &'static str {
    include_str!("../../resources/slideMasters/slideMaster1.xml")
}

/// Slide layout 1 (Title Slide).
pub(crate) fn slide_layout_1_xml() -> &'static str {
    include_str!("../../resources/slideLayouts/slideLayout1.xml")
}

/// Slide layout 2 (Title and Content).
pub(crate) fn slide_layout_2_xml() -> &'static str {
    include_str!("../../resources/slideLayouts/slideLayout2.xml")
}

/// Slide layout 3 (Title Only).
pub(crate) fn slide_layout_3_xml() -> &'static str {
    include_str!("../../resources/slideLayouts/slideLayout3.xml")
}

/// All slide layouts in part order.
pub(crate) fn slide_layouts() -> [&'static str; 3] {
    [
        slide_layout_1_xml(),
        slide_layout_2_xml(),
        slide_layout_3_xml(),
    ]
}

/// Minimal valid theme.
pub(crate) fn theme_xml() -> &'static str {
    include_str!("../../resources/theme/theme1.xml")
}

pub(crate) fn pres_props_xml() -> &'static str {
    include_str!("../../resources/presProps.xml")
}

pub(crate) fn view_props_xml() -> &'static str {
    include_str!("../../resources/viewProps.xml")
}

pub(crate) fn table_styles_xml() -> &'static str {
    include_str!("../../resources/tableStyles.xml")
}

/// Core properties. Static content, so repeated builds are byte-identical.
pub(crate) fn core_props_xml() -> &'static str {
    include_str!("../../resources/docProps/core.xml")
}

/// Extended (application) properties.
pub(crate) fn app_props_xml() -> &'static str {
    include_str!("../../resources/docProps/app.xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_lists_all_layouts() {
        let master = slide_master_xml();
        assert!(master.contains("<p:sldLayoutIdLst>"));
        assert!(master.contains(r#"r:id="rId1""#));
        assert!(master.contains(r#"r:id="rId3""#));
    }

    #[test]
    fn test_layout_types() {
        assert!(slide_layout_1_xml().contains(r#"type="title""#));
        assert!(slide_layout_2_xml().contains(r#"type="obj""#));
        assert!(slide_layout_3_xml().contains(r#"type="titleOnly""#));
    }

    #[test]
    fn test_theme_has_required_schemes() {
        let theme = theme_xml();
        assert!(theme.contains("<a:clrScheme"));
        assert!(theme.contains("<a:fontScheme"));
        assert!(theme.contains("<a:fmtScheme"));
    }
}
