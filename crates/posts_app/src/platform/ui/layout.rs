/// Fixed rows of the screen, top to bottom: title, filter input, separator,
/// the scrollable list, actions, status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub title_row: u16,
    pub filter_row: u16,
    pub separator_row: u16,
    pub list_top: u16,
    pub list_height: u16,
    pub actions_row: u16,
    pub status_row: u16,
}

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 2;

impl Layout {
    pub fn compute(width: u16, height: u16) -> Self {
        let list_height = height.saturating_sub(HEADER_ROWS + FOOTER_ROWS);
        let list_top = HEADER_ROWS;
        Self {
            width,
            height,
            title_row: 0,
            filter_row: 1,
            separator_row: 2,
            list_top,
            list_height,
            actions_row: list_top + list_height,
            status_row: list_top + list_height + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_fills_space_between_header_and_footer() {
        let layout = Layout::compute(80, 24);
        assert_eq!(layout.list_top, 3);
        assert_eq!(layout.list_height, 19);
        assert_eq!(layout.actions_row, 22);
        assert_eq!(layout.status_row, 23);
    }

    #[test]
    fn tiny_terminal_has_empty_list() {
        let layout = Layout::compute(10, 4);
        assert_eq!(layout.list_height, 0);
    }
}
