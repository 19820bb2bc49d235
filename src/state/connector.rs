// Geometry for the connector bar drawn between two cells.

/// Element rectangle relative to the board container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub distance: f64,
    /// Degrees clockwise from straight up; CSS `rotate()` uses the same convention.
    pub angle: f64,
    pub left: f64,
    pub bottom: f64,
}

impl Connector {
    pub fn style(&self, thickness: f64) -> String {
        format!(
            "position:absolute; left:{:.1}px; bottom:{:.1}px; width:{:.1}px; height:{:.1}px; transform-origin:50% 100%; transform:rotate({:.2}deg);",
            self.left - thickness / 2.0,
            self.bottom,
            thickness,
            self.distance,
            self.angle
        )
    }
}

/// Centre-to-centre connector from `from` to `to` inside a container of `container_height`.
pub fn connector_between(from: Rect, to: Rect, container_height: f64) -> Connector {
    let (fx, fy) = from.center();
    let (tx, ty) = to.center();
    Connector {
        distance: (tx - fx).hypot(ty - fy),
        angle: (tx - fx).atan2(fy - ty).to_degrees(),
        left: fx,
        bottom: container_height - fy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn cell(x: f64, y: f64) -> Rect {
        Rect { x, y, width: 10.0, height: 10.0 }
    }

    #[test]
    fn horizontal_points_right() {
        let c = connector_between(cell(0.0, 0.0), cell(20.0, 0.0), 30.0);
        assert!((c.distance - 20.0).abs() < EPS);
        assert!((c.angle - 90.0).abs() < EPS);
        assert!((c.left - 5.0).abs() < EPS);
        assert!((c.bottom - 25.0).abs() < EPS);
    }

    #[test]
    fn vertical_points_down() {
        let c = connector_between(cell(0.0, 0.0), cell(0.0, 20.0), 30.0);
        assert!((c.distance - 20.0).abs() < EPS);
        assert!((c.angle - 180.0).abs() < EPS);
    }

    #[test]
    fn anti_diagonal() {
        let c = connector_between(cell(20.0, 0.0), cell(0.0, 20.0), 30.0);
        assert!((c.distance - 20.0 * 2f64.sqrt()).abs() < EPS);
        assert!((c.angle + 135.0).abs() < EPS);
    }

    #[test]
    fn style_centres_bar_on_start() {
        let c = Connector { distance: 50.0, angle: 45.0, left: 10.0, bottom: 5.0 };
        let style = c.style(4.0);
        assert!(style.contains("left:8.0px"));
        assert!(style.contains("height:50.0px"));
        assert!(style.contains("rotate(45.00deg)"));
    }
}
