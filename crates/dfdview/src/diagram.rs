//! The built-in level 2 data-flow diagram of the generic medicine suggestion
//! system.
//!
//! Every element is hand-placed on a `3000 × 2200` canvas. Processes are
//! grouped in rows by subsystem (authentication, medicine information,
//! comparison and search, prescriptions, administration), external entities
//! sit in the left column, and data stores in the right-hand column.

use dfdview_core::{
    geometry::{Point, Size},
    scene::{Scene, SceneBuilder},
};

pub const TITLE: &str = "DFD Level 2 - Generic Medicine Suggestion System";

/// Canvas of the diagram, i.e. its SVG view box.
pub const CANVAS: Size = Size::new(3000.0, 2200.0);

const fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Builds the diagram: 4 external entities, 14 processes, 6 data stores and
/// 46 data flows.
pub fn medicine_level2() -> Scene {
    let builder = SceneBuilder::new(TITLE, CANVAS)
        .entity(p(150.0, 350.0), "User")
        .entity(p(150.0, 1050.0), "Pharmacist")
        .entity(p(150.0, 1650.0), "Admin")
        .entity_sized(p(2650.0, 250.0), Size::new(160.0, 70.0), "Google Auth Service");

    let builder = builder
        .process(p(750.0, 300.0), "1.1", "Login/Signup\nusing Gmail")
        .process(p(1150.0, 300.0), "1.2", "Authenticate via\nGoogleAuthService")
        .process(p(1550.0, 300.0), "1.3", "Validate User\nCredentials")
        .process(p(650.0, 650.0), "2.1", "View Composition\n& Ingredients")
        .process(p(1050.0, 650.0), "2.2", "View Available\nMedicine Forms")
        .process(p(1450.0, 650.0), "2.3", "View Search\nHistory")
        .process(p(650.0, 900.0), "2.4", "View Usage &\nDosage Info")
        .process(p(1050.0, 900.0), "2.5", "View Reports in\nMultiple Languages")
        .process(p(650.0, 1200.0), "3.1", "Compare Generic\n& Branded Prices")
        .process(p(1150.0, 1200.0), "3.2", "Locate Nearest\nPharmacy")
        .process(p(650.0, 1500.0), "4.1", "Verify Medicine\nwith Prescription")
        .process(p(1150.0, 1500.0), "4.2", "Parse\nPrescription")
        .process(p(650.0, 1800.0), "5.1", "Add New\nMedicine")
        .process(p(1150.0, 1800.0), "5.2", "Update or Remove\nMedicine");

    let builder = builder
        .store(p(1950.0, 200.0), "D1:", "User Data Store")
        .store(p(1950.0, 500.0), "D2:", "Medicine Database")
        .store(p(1950.0, 800.0), "D3:", "Search History Store")
        .store(p(1950.0, 1100.0), "D4:", "Report Data Store")
        .store(p(1950.0, 1400.0), "D5:", "Pharmacy Database")
        .store(p(1950.0, 1700.0), "D6:", "Prescription Data Store");

    // Authentication
    let builder = builder
        .flow([p(290.0, 385.0), p(685.0, 300.0)], "User Credentials")
        .flow([p(815.0, 300.0), p(1095.0, 300.0)], "Auth Request")
        .flow([p(1255.0, 300.0), p(2650.0, 270.0)], "Token Request")
        .cubic_flow(
            p(2650.0, 290.0),
            p(1255.0, 330.0),
            [p(2400.0, 320.0), p(2100.0, 350.0)],
            "Validated Token",
        )
        .flow([p(1150.0, 365.0), p(1500.0, 365.0)], "Token Data")
        .flow([p(1615.0, 300.0), p(1950.0, 230.0)], "Store User Data")
        .flow([p(1950.0, 250.0), p(1615.0, 320.0)], "User Profile")
        .flow([p(1490.0, 300.0), p(815.0, 300.0)], "Login Confirmation")
        .flow([p(750.0, 235.0), p(290.0, 370.0)], "Access Granted");

    // Medicine information access
    let builder = builder
        .cubic_flow(
            p(290.0, 405.0),
            p(585.0, 650.0),
            [p(400.0, 500.0), p(500.0, 600.0)],
            "Medicine Query",
        )
        .flow([p(715.0, 650.0), p(1950.0, 530.0)], "Request Composition")
        .flow([p(1950.0, 550.0), p(715.0, 695.0)], "Composition Data")
        .cubic_flow(
            p(290.0, 425.0),
            p(985.0, 650.0),
            [p(600.0, 520.0), p(800.0, 600.0)],
            "Form Query",
        )
        .flow([p(1115.0, 650.0), p(1950.0, 580.0)], "Request Forms")
        .flow([p(1950.0, 600.0), p(1115.0, 695.0)], "Form Details")
        .flow([p(1450.0, 715.0), p(1950.0, 830.0)], "Save Search")
        .cubic_flow(
            p(1950.0, 850.0),
            p(1450.0, 715.0),
            [p(1750.0, 750.0), p(1600.0, 700.0)],
            "History Data",
        )
        .cubic_flow(
            p(290.0, 445.0),
            p(585.0, 900.0),
            [p(400.0, 650.0), p(500.0, 800.0)],
            "Dosage Query",
        )
        .flow([p(715.0, 900.0), p(1950.0, 850.0)], "Request Dosage")
        .flow([p(1950.0, 870.0), p(715.0, 945.0)], "Dosage Info")
        .flow([p(1050.0, 965.0), p(1950.0, 1150.0)], "Request Report")
        .cubic_flow(
            p(1950.0, 1170.0),
            p(1050.0, 965.0),
            [p(1550.0, 1050.0), p(1350.0, 1000.0)],
            "Translated Report",
        );

    // Comparison and search
    let builder = builder
        .cubic_flow(
            p(290.0, 1095.0),
            p(585.0, 1200.0),
            [p(400.0, 1150.0), p(500.0, 1180.0)],
            "Price Query",
        )
        .flow([p(715.0, 1200.0), p(1950.0, 1450.0)], "Request Prices")
        .flow([p(1950.0, 1470.0), p(715.0, 1245.0)], "Price Data")
        .flow([p(650.0, 1135.0), p(290.0, 1115.0)], "Comparison Result")
        .cubic_flow(
            p(290.0, 1125.0),
            p(1085.0, 1200.0),
            [p(700.0, 1170.0), p(900.0, 1190.0)],
            "Location Query",
        )
        .flow([p(1255.0, 1200.0), p(1950.0, 1425.0)], "Request Pharmacies")
        .flow([p(1950.0, 1445.0), p(1255.0, 1245.0)], "Pharmacy Locations")
        .flow([p(1150.0, 1135.0), p(290.0, 1145.0)], "Nearest Pharmacy");

    // Prescription handling
    let builder = builder
        .cubic_flow(
            p(290.0, 1125.0),
            p(585.0, 1500.0),
            [p(400.0, 1300.0), p(500.0, 1450.0)],
            "Prescription Image",
        )
        .flow([p(715.0, 1500.0), p(1085.0, 1500.0)], "Upload Prescription")
        .flow([p(1255.0, 1500.0), p(1950.0, 1750.0)], "Parsed Data")
        .flow([p(1950.0, 1770.0), p(1255.0, 1545.0)], "Prescription Details")
        .flow([p(1150.0, 1435.0), p(650.0, 1435.0)], "Verify Data")
        .cubic_flow(
            p(650.0, 1435.0),
            p(290.0, 1165.0),
            [p(450.0, 1350.0), p(350.0, 1250.0)],
            "Verification Result",
        );

    // Administration
    let builder = builder
        .flow([p(290.0, 1685.0), p(585.0, 1800.0)], "New Medicine Info")
        .cubic_flow(
            p(715.0, 1800.0),
            p(1950.0, 750.0),
            [p(1300.0, 1550.0), p(1700.0, 1150.0)],
            "Add to Database",
        )
        .flow([p(1950.0, 770.0), p(715.0, 1845.0)], "Confirmation")
        .flow([p(650.0, 1735.0), p(290.0, 1705.0)], "Success Message")
        .cubic_flow(
            p(290.0, 1705.0),
            p(1085.0, 1800.0),
            [p(700.0, 1750.0), p(900.0, 1780.0)],
            "Update Request",
        )
        .cubic_flow(
            p(1255.0, 1800.0),
            p(1950.0, 1570.0),
            [p(1600.0, 1700.0), p(1800.0, 1600.0)],
            "Modify Database",
        )
        .flow([p(1950.0, 1590.0), p(1255.0, 1845.0)], "Update Status")
        .flow([p(1150.0, 1735.0), p(290.0, 1725.0)], "Update Complete")
        .cubic_flow(
            p(1150.0, 1865.0),
            p(1950.0, 1250.0),
            [p(1600.0, 1700.0), p(1800.0, 1400.0)],
            "Generate Report",
        )
        .cubic_flow(
            p(1950.0, 1270.0),
            p(1150.0, 1735.0),
            [p(1800.0, 1500.0), p(1600.0, 1650.0)],
            "Report Data",
        );

    builder.build()
}
