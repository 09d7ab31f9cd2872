use crate::models::Project;

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub about: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "FerreExpress S.A.S.",
    tagline: "Movimiento de tierras, obras civiles y alquiler de maquinaria.",
    description: "Ejecutamos proyectos con cumplimiento, calidad y certificaciones de \
                  disposición de escombros. Servicio en Cali y ciudades aledañas.",
    about: "FerreExpress S.A.S. es una empresa de obras civiles especializada en \
            movimiento de tierras, construcción y mantenimiento de infraestructura. \
            Contamos con equipo y operación propia (maquinaria amarilla y transporte) \
            y abastecemos materiales provenientes de canteras certificadas, \
            garantizando trazabilidad, calidad de suministro y cumplimiento normativo \
            en cada proyecto. Operamos en Cali y ciudades aledañas, atendiendo \
            clientes del sector público y privado con un enfoque en seguridad, \
            productividad y sostenibilidad.",
    phone: "+57 315 555 0143 · +57 302 555 0118",
    email: "contacto@ferreexpress.com.co · comercial@ferreexpress.com.co",
    address: "Cali, Colombia · Calle 16 #76-28, Prados del Limonar",
};

pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub bullets: [&'static str; 3],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Demolición",
        summary: "Planeación, permisos y ejecución segura.",
        bullets: [
            "Protocolos HSE y control perimetral.",
            "Gestión de permisos y actas.",
            "Manifiestos de RCD certificados.",
        ],
    },
    Service {
        title: "Excavaciones",
        summary: "Excavación y conformación de terrazas.",
        bullets: [
            "Nivelación y replanteo topográfico.",
            "Flota propia para acarreo y disposición.",
            "Estabilidad de taludes y drenajes.",
        ],
    },
    Service {
        title: "Movimiento de tierra",
        summary: "Cortes, llenos y transporte.",
        bullets: [
            "Subrasante y compactación por capas.",
            "Ejecución bajo cronograma pactado.",
            "Ensayos Proctor y densidades in situ.",
        ],
    },
    Service {
        title: "Urbanismo",
        summary: "Sardineles, andenes y paisajismo.",
        bullets: [
            "Trazados precisos y acabados limpios.",
            "Especificaciones y fichas técnicas.",
            "Señalización y orden en obra.",
        ],
    },
    Service {
        title: "Vías",
        summary: "Placas huella, pavimentos y subrasantes.",
        bullets: [
            "Control de cotas y pendientes.",
            "Base y subbase con certificados.",
            "Juntas, curado y acabados de calidad.",
        ],
    },
    Service {
        title: "Edificaciones",
        summary: "Obras civiles y adecuaciones.",
        bullets: [
            "Estructuras menores y muros.",
            "Control de materiales y actas.",
            "Seguridad y orden en frentes.",
        ],
    },
];

pub struct Capability {
    pub title: &'static str,
    pub text: &'static str,
}

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Movimientos de tierra",
        text: "Excavación, corte, relleno, conformación de taludes, transporte y disposición.",
    },
    Capability {
        title: "Ejecución de obras civiles",
        text: "Estructuras menores, drenajes, muros, andenes y espacio público.",
    },
    Capability {
        title: "Ferretería",
        text: "Gestión de materiales desde canteras certificadas y soporte documental.",
    },
    Capability {
        title: "Alquiler de maquinaria",
        text: "Retroexcavadoras, compactadores, bulldozers y más, con operador.",
    },
    Capability {
        title: "Venta de materiales",
        text: "Suministro confiable desde canteras de alta calidad (ensayos y certificados).",
    },
    Capability {
        title: "Interventoría",
        text: "Acompañamiento técnico y control de calidad durante la ejecución.",
    },
];

/// Featured cards: the needle is matched case-insensitively as a substring
/// of client or work; the photo is the card image under the gallery dir.
pub const FEATURED: &[(&str, &str)] = &[
    ("postobón", "postobon.jpg"),
    ("madecentro", "madecentro.jpg"),
    ("alkosto", "alkosto.jpg"),
    ("papeles del cauca", "papeles-del-cauca.jpg"),
    ("monticello", "monticello.jpg"),
    ("colegio bolívar", "colegio-bolivar.jpg"),
];

/// First catalog record whose client or work contains the needle.
pub fn find_featured<'a>(projects: &'a [Project], needle: &str) -> Option<&'a Project> {
    let n = needle.to_lowercase();
    projects
        .iter()
        .find(|p| p.client.to_lowercase().contains(&n) || p.work.to_lowercase().contains(&n))
}

/// Card title fallback when a needle has no catalog match.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
