use crate::geo::Location;

const CAMPUS: [(u32, &str, f64, f64); 16] = [
    (1, "水院实验楼", 405.0, 125.0),
    (2, "信电学院", 350.0, 165.0),
    (3, "锅炉房", 480.0, 150.0),
    (4, "图书馆", 500.0, 200.0),
    (5, "第三教学楼", 380.0, 295.0),
    (6, "食品学院", 380.0, 330.0),
    (7, "体育馆", 515.0, 400.0),
    (8, "运动场", 605.0, 385.0),
    (9, "旧图书馆", 295.0, 435.0),
    (10, "计算中心", 245.0, 420.0),
    (11, "第一教学楼", 375.0, 480.0),
    (12, "第二教学楼", 280.0, 490.0),
    (13, "主楼", 330.0, 540.0),
    (14, "二号学生公寓", 683.0, 441.0),
    (15, "三号学生公寓", 572.0, 265.0),
    (16, "民主楼", 480.0, 525.0),
];

/// The campus map, in catalog order.
pub fn campus_locations() -> Vec<Location> {
    CAMPUS
        .iter()
        .map(|&(id, name, x, y)| Location::new(id, name, x, y))
        .collect()
}
