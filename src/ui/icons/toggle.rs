// SPDX-License-Identifier: MPL-2.0
//! Toggle icons: radio buttons, check boxes and stars.

define_icon!(
    radio_button_checked,
    RADIO_BUTTON_CHECKED,
    "M12 7c-2.76 0-5 2.24-5 5s2.24 5 5 5 5-2.24 5-5-2.24-5-5-5zm0-5C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.42 0-8-3.58-8-8s3.58-8 8-8 8 3.58 8 8-3.58 8-8 8z",
    "Selected radio button: a dot inside a ring."
);
define_icon!(
    radio_button_unchecked,
    RADIO_BUTTON_UNCHECKED,
    "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.42 0-8-3.58-8-8s3.58-8 8-8 8 3.58 8 8-3.58 8-8 8z",
    "Unselected radio button: an empty ring."
);
define_icon!(
    check_box,
    CHECK_BOX,
    "M19 3H5c-1.11 0-2 .9-2 2v14c0 1.1.89 2 2 2h14c1.11 0 2-.9 2-2V5c0-1.1-.89-2-2-2zm-9 14l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
    "Checked box: filled square with a check mark."
);
define_icon!(
    check_box_outline_blank,
    CHECK_BOX_OUTLINE_BLANK,
    "M19 5v14H5V5h14m0-2H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2z",
    "Unchecked box: square outline."
);
define_icon!(
    indeterminate_check_box,
    INDETERMINATE_CHECK_BOX,
    "M19 3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm-2 10H7v-2h10v2z",
    "Partially checked box: filled square with a dash."
);
define_icon!(
    star,
    STAR,
    "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z",
    "Filled star."
);
define_icon!(
    star_border,
    STAR_BORDER,
    "M22 9.24l-7.19-.62L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21 12 17.27 18.18 21l-1.63-7.03L22 9.24zM12 15.4l-3.76 2.27 1-4.28-3.32-2.88 4.38-.38L12 6.1l1.71 4.04 4.38.38-3.32 2.88 1 4.28L12 15.4z",
    "Star outline."
);

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: [&str; 7] = [
        RADIO_BUTTON_CHECKED,
        RADIO_BUTTON_UNCHECKED,
        CHECK_BOX,
        CHECK_BOX_OUTLINE_BLANK,
        INDETERMINATE_CHECK_BOX,
        STAR,
        STAR_BORDER,
    ];

    #[test]
    fn paths_are_closed_absolute_paths() {
        for path in PATHS {
            assert!(path.starts_with('M'), "{path}");
            assert!(path.ends_with('z'), "{path}");
        }
    }

    #[test]
    fn checked_radio_adds_the_inner_dot() {
        assert!(RADIO_BUTTON_CHECKED.ends_with(RADIO_BUTTON_UNCHECKED.trim_start_matches("M12 2")));
        assert!(RADIO_BUTTON_CHECKED.len() > RADIO_BUTTON_UNCHECKED.len());
    }

    #[test]
    fn constructors_are_distinct() {
        let ids = [
            radio_button_checked().handle().id(),
            radio_button_unchecked().handle().id(),
            check_box().handle().id(),
            check_box_outline_blank().handle().id(),
            indeterminate_check_box().handle().id(),
            star().handle().id(),
            star_border().handle().id(),
        ];
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
        }
    }
}
