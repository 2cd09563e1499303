//! Fixed reference data served without touching the store.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClinicService {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

pub const CATEGORIES: [Category; 6] = [
    Category { id: "racao", name: "Ração", icon: "bowl" },
    Category { id: "brinquedos", name: "Brinquedos", icon: "bone" },
    Category { id: "higiene", name: "Higiene", icon: "droplet" },
    Category { id: "acessorios", name: "Acessórios", icon: "collar" },
    Category { id: "medicamentos", name: "Medicamentos", icon: "pill" },
    Category { id: "camas", name: "Camas e Casinhas", icon: "home" },
];

pub const SERVICES: [ClinicService; 6] = [
    ClinicService {
        id: "consulta",
        name: "Consulta Veterinária",
        description: "Atendimento completo com diagnóstico e orientação profissional",
        duration: "30-45 min",
    },
    ClinicService {
        id: "vacina",
        name: "Vacinação",
        description: "Imunização completa para cães e gatos",
        duration: "15-20 min",
    },
    ClinicService {
        id: "banho",
        name: "Banho e Tosa",
        description: "Higiene completa com produtos de qualidade",
        duration: "60-90 min",
    },
    ClinicService {
        id: "exames",
        name: "Exames Laboratoriais",
        description: "Análises clínicas para diagnóstico preciso",
        duration: "Variável",
    },
    ClinicService {
        id: "cirurgia",
        name: "Procedimentos Cirúrgicos",
        description: "Cirurgias com equipe especializada",
        duration: "Variável",
    },
    ClinicService {
        id: "emergencia",
        name: "Emergência",
        description: "Atendimento urgente para casos críticos",
        duration: "Imediato",
    },
];

/// Half-hour slots offered on every day; stored appointments are not consulted.
pub const TIME_SLOTS: [&str; 16] = [
    "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
];

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn services() -> &'static [ClinicService] {
    &SERVICES
}

// TODO: exclude slots already taken by appointments on `date` once booking conflicts are handled
pub fn available_times(_date: &str) -> Vec<&'static str> {
    TIME_SLOTS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_do_not_depend_on_date() {
        let a = available_times("2024-01-01");
        let b = available_times("not even a date");
        assert_eq!(a.len(), 16);
        assert_eq!(a, b);
        assert_eq!(a.first(), Some(&"08:00"));
        assert_eq!(a.last(), Some(&"17:30"));
        assert!(!a.contains(&"12:00"));
    }

    #[test]
    fn catalogs_have_unique_ids() {
        let mut ids: Vec<&str> = categories().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert!(services().iter().any(|s| s.id == "emergencia"));
    }
}
