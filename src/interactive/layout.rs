use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Book list and detail side by side
pub struct PanelLayout {
    pub list: Rect,
    pub detail: Rect,
}

pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(notif_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        notifications: chunks[2],
        footer: chunks[3],
    }
}

/// Narrow terminals (<90 cols) get the list only.
pub fn panel_layout(area: Rect) -> PanelLayout {
    if area.width < 90 {
        return PanelLayout {
            list: area,
            detail: Rect::default(),
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    PanelLayout {
        list: chunks[0],
        detail: chunks[1],
    }
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_small_area() {
        let popup = centered_popup(60, 20, Rect::new(0, 0, 40, 10));
        assert_eq!(popup, Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn test_narrow_terminal_hides_detail() {
        let panels = panel_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(panels.detail.width, 0);
        assert_eq!(panels.list.width, 80);
    }
}
