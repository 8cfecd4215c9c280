//! Sample catalog data for tests and shell demos.

use jama_core::{GeoPoint, Place, PlaceCategory};

/// Four venues, one per outing profile (two for work). Mirrors the demo
/// dataset the product ships while the real feed is offline.
pub fn sample_places() -> Vec<Place> {
    vec![
        Place {
            id: 1,
            name: "Café Palermo".to_string(),
            category: PlaceCategory::Trabajo,
            rating: 4.8,
            distance: "0.5 km".to_string(),
            price: "$$".to_string(),
            description: "Cafetería tranquila con excelente wifi y ambiente para trabajar"
                .to_string(),
            amenities: vec![
                "WiFi gratuito".to_string(),
                "Enchufes".to_string(),
                "Ambiente tranquilo".to_string(),
                "Café de especialidad".to_string(),
            ],
            location: GeoPoint {
                lat: -34.5875,
                lng: -58.4156,
            },
        },
        Place {
            id: 2,
            name: "Parque Centenario".to_string(),
            category: PlaceCategory::Familia,
            rating: 4.6,
            distance: "1.2 km".to_string(),
            price: "Gratis".to_string(),
            description: "Amplio parque con juegos infantiles y espacios verdes".to_string(),
            amenities: vec![
                "Juegos infantiles".to_string(),
                "Espacio verde".to_string(),
                "Seguro".to_string(),
                "Baños públicos".to_string(),
            ],
            location: GeoPoint {
                lat: -34.6063,
                lng: -58.4227,
            },
        },
        Place {
            id: 3,
            name: "Rooftop Romance".to_string(),
            category: PlaceCategory::Pareja,
            rating: 4.9,
            distance: "0.8 km".to_string(),
            price: "$$$".to_string(),
            description: "Bar en terraza con vista panorámica y ambiente romántico".to_string(),
            amenities: vec![
                "Terraza".to_string(),
                "Vista panorámica".to_string(),
                "Ambiente íntimo".to_string(),
                "Carta de cocktails".to_string(),
            ],
            location: GeoPoint {
                lat: -34.5756,
                lng: -58.4124,
            },
        },
        Place {
            id: 4,
            name: "Co-working Hub".to_string(),
            category: PlaceCategory::Trabajo,
            rating: 4.7,
            distance: "0.3 km".to_string(),
            price: "$$".to_string(),
            description: "Espacio de coworking moderno con todas las comodidades".to_string(),
            amenities: vec![
                "Salas de reunión".to_string(),
                "Café ilimitado".to_string(),
                "Impresora".to_string(),
                "Escritorios amplios".to_string(),
            ],
            location: GeoPoint {
                lat: -34.5912,
                lng: -58.4098,
            },
        },
    ]
}
