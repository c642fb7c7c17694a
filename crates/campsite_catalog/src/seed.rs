use crate::types::CampsiteRecord;

/// Returns the built-in sample catalog, in display order.
pub fn sample_campsites() -> Vec<CampsiteRecord> {
    vec![
        CampsiteRecord {
            id: 1,
            name: "Pine Valley Campground".to_string(),
            description: "Nestled among towering pines with easy access to hiking trails."
                .to_string(),
            location: "Mountain View".to_string(),
            state: "California".to_string(),
            has_water: true,
            has_electricity: true,
            has_restrooms: true,
            price_per_night: 25.00,
            image_url: "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80".to_string(),
        },
        CampsiteRecord {
            id: 2,
            name: "Lakeside Retreat".to_string(),
            description: "Beautiful waterfront sites with fishing and swimming access.".to_string(),
            location: "Lake City".to_string(),
            state: "Oregon".to_string(),
            has_water: true,
            has_electricity: false,
            has_restrooms: true,
            price_per_night: 20.00,
            image_url: "https://images.unsplash.com/photo-1537905569824-f89f14cceb68?ixlib=rb-1.2.1&auto=format&fit=crop&w=1347&q=80".to_string(),
        },
        CampsiteRecord {
            id: 3,
            name: "Desert Oasis".to_string(),
            description: "Experience the beauty of the desert with stunning sunset views."
                .to_string(),
            location: "Red Rock".to_string(),
            state: "Arizona".to_string(),
            has_water: true,
            has_electricity: true,
            has_restrooms: false,
            price_per_night: 15.00,
            image_url: "https://images.unsplash.com/photo-1566405901254-27b6e518c6b6?ixlib=rb-1.2.1&auto=format&fit=crop&w=1349&q=80".to_string(),
        },
        CampsiteRecord {
            id: 4,
            name: "Mountain Heights".to_string(),
            description: "High elevation camping with breathtaking mountain vistas.".to_string(),
            location: "Summit Peak".to_string(),
            state: "Colorado".to_string(),
            has_water: false,
            has_electricity: false,
            has_restrooms: true,
            price_per_night: 18.00,
            image_url: "https://images.unsplash.com/photo-1510312305653-8ed496efae75?ixlib=rb-1.2.1&auto=format&fit=crop&w=1267&q=80".to_string(),
        },
        CampsiteRecord {
            id: 5,
            name: "Riverside Escape".to_string(),
            description: "Camp alongside a gentle river with great kayaking opportunities."
                .to_string(),
            location: "River Junction".to_string(),
            state: "Washington".to_string(),
            has_water: true,
            has_electricity: true,
            has_restrooms: true,
            price_per_night: 30.00,
            image_url: "https://images.unsplash.com/photo-1536431311719-398b6704d4cc?ixlib=rb-1.2.1&auto=format&fit=crop&w=1267&q=80".to_string(),
        },
    ]
}
