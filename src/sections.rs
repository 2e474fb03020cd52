// src/sections.rs
//! The eight typed configuration sections and the aggregate `DenConfig`
//!
//! Field names inside records keep their historical spelling so existing
//! containers read back unchanged. Missing fields decode to empty strings,
//! except `DenServerConfig::login_required` which defaults to `"false"`,
//! and the binary key-material fields which decode to `None`.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEN_DOCKER_COLLECTION, DEN_IMAGE_COLLECTION, DEN_LUCID_COLLECTION, DEN_MONGO_COLLECTION,
    DEN_PICKY_COLLECTION, DEN_ROUTER_COLLECTION, DEN_SERVER_COLLECTION, DEN_TRAEFIK_COLLECTION,
};
use crate::record::{ConfigSection, Record};

/// Container images for each service of the deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenImageConfig {
    pub mongo_image: String,
    pub lucid_image: String,
    pub picky_image: String,
    pub router_image: String,
    pub server_image: String,
    pub traefik_image: String,
    pub jet_image: String,
}

impl ConfigSection for DenImageConfig {
    const COLLECTION: &'static str = DEN_IMAGE_COLLECTION;

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert_text("DenMongoImage", &self.mongo_image);
        record.insert_text("DenLucidImage", &self.lucid_image);
        record.insert_text("DenPickyImage", &self.picky_image);
        record.insert_text("DenRouterImage", &self.router_image);
        record.insert_text("DenServerImage", &self.server_image);
        record.insert_text("DenTraefikImage", &self.traefik_image);
        record.insert_text("DevolutionsJetImage", &self.jet_image);
        record
    }

    fn from_record(record: &Record) -> Self {
        Self {
            mongo_image: record.text("DenMongoImage"),
            lucid_image: record.text("DenLucidImage"),
            picky_image: record.text("DenPickyImage"),
            router_image: record.text("DenRouterImage"),
            server_image: record.text("DenServerImage"),
            traefik_image: record.text("DenTraefikImage"),
            jet_image: record.text("DevolutionsJetImage"),
        }
    }
}

/// Database connection (MongoDB).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenMongoConfig {
    pub url: String,
    pub port: String,
}

impl ConfigSection for DenMongoConfig {
    const COLLECTION: &'static str = DEN_MONGO_COLLECTION;

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert_text("Url", &self.url);
        record.insert_text("Port", &self.port);
        record
    }

    fn from_record(record: &Record) -> Self {
        Self {
            url: record.text("Url"),
            port: record.text("Port"),
        }
    }
}

/// Identity broker (Picky) settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenPickyConfig {
    pub realm: String,
    pub api_key: String,
    pub backend: String,
}

impl ConfigSection for DenPickyConfig {
    const COLLECTION: &'static str = DEN_PICKY_COLLECTION;

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert_text("Realm", &self.realm);
        record.insert_text("ApiKey", &self.api_key);
        record.insert_text("Backend", &self.backend);
        record
    }

    fn from_record(record: &Record) -> Self {
        Self {
            realm: record.text("Realm"),
            api_key: record.text("ApiKey"),
            backend: record.text("Backend"),
        }
    }
}

/// Admin identity (Lucid) settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenLucidConfig {
    pub api_key: String,
    pub admin_secret: String,
    pub admin_username: String,
}

impl ConfigSection for DenLucidConfig {
    const COLLECTION: &'static str = DEN_LUCID_COLLECTION;

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert_text("ApiKey", &self.api_key);
        record.insert_text("AdminSecret", &self.admin_secret);
        record.insert_text("AdminUsername", &self.admin_username);
        record
    }

    fn from_record(record: &Record) -> Self {
        Self {
            api_key: record.text("ApiKey"),
            admin_secret: record.text("AdminSecret"),
            admin_username: record.text("AdminUsername"),
        }
    }
}

/// Routing/gateway settings. The public key is opaque binary material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenRouterConfig {
    pub public_key: Option<Vec<u8>>,
}

impl ConfigSection for DenRouterConfig {
    const COLLECTION: &'static str = DEN_ROUTER_COLLECTION;

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert_bytes("PublicKey", self.public_key.as_deref());
        record
    }

    fn from_record(record: &Record) -> Self {
        Self {
            public_key: record.bytes("PublicKey"),
        }
    }
}

/// Server settings, including LDAP integration and the private key blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenServerConfig {
    pub api_key: String,
    pub audit_trails: String,
    pub external_url: String,
    pub ldap_server_type: String,
    pub ldap_base_dn: String,
    pub ldap_password: String,
    pub ldap_server_url: String,
    pub ldap_user_group: String,
    pub ldap_username: String,
    pub private_key: Option<Vec<u8>>,
    pub jet_server_url: String,
    pub login_required: String,
}

impl Default for DenServerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            audit_trails: String::new(),
            external_url: String::new(),
            ldap_server_type: String::new(),
            ldap_base_dn: String::new(),
            ldap_password: String::new(),
            ldap_server_url: String::new(),
            ldap_user_group: String::new(),
            ldap_username: String::new(),
            private_key: None,
            jet_server_url: String::new(),
            // matches the tolerant-read default
            login_required: "false".to_owned(),
        }
    }
}

impl ConfigSection for DenServerConfig {
    const COLLECTION: &'static str = DEN_SERVER_COLLECTION;

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert_text("ApiKey", &self.api_key);
        record.insert_text("AuditTrails", &self.audit_trails);
        record.insert_text("ExternalUrl", &self.external_url);
        record.insert_text("LDAPServerType", &self.ldap_server_type);
        record.insert_text("LDAPBaseDN", &self.ldap_base_dn);
        record.insert_text("LDAPPassword", &self.ldap_password);
        record.insert_text("LDAPServerUrl", &self.ldap_server_url);
        record.insert_text("LDAPUserGroup", &self.ldap_user_group);
        record.insert_text("LDAPUsername", &self.ldap_username);
        record.insert_bytes("PrivateKey", self.private_key.as_deref());
        record.insert_text("JetServerUrl", &self.jet_server_url);
        record.insert_text("LoginRequired", &self.login_required);
        record
    }

    fn from_record(record: &Record) -> Self {
        Self {
            api_key: record.text("ApiKey"),
            audit_trails: record.text("AuditTrails"),
            external_url: record.text("ExternalUrl"),
            ldap_server_type: record.text("LDAPServerType"),
            ldap_base_dn: record.text("LDAPBaseDN"),
            ldap_password: record.text("LDAPPassword"),
            ldap_server_url: record.text("LDAPServerUrl"),
            ldap_user_group: record.text("LDAPUserGroup"),
            ldap_username: record.text("LDAPUsername"),
            private_key: record.bytes("PrivateKey"),
            jet_server_url: record.text("JetServerUrl"),
            login_required: record.text_or("LoginRequired", "false"),
        }
    }
}

/// Edge reverse-proxy (Traefik) settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenTraefikConfig {
    pub api_port: String,
    pub wayk_den_port: String,
    pub certificate: String,
    pub private_key: Option<Vec<u8>>,
}

impl ConfigSection for DenTraefikConfig {
    const COLLECTION: &'static str = DEN_TRAEFIK_COLLECTION;

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert_text("ApiPort", &self.api_port);
        record.insert_text("WaykDenPort", &self.wayk_den_port);
        record.insert_text("Certificate", &self.certificate);
        record.insert_bytes("PrivateKey", self.private_key.as_deref());
        record
    }

    fn from_record(record: &Record) -> Self {
        Self {
            api_port: record.text("ApiPort"),
            wayk_den_port: record.text("WaykDenPort"),
            certificate: record.text("Certificate"),
            private_key: record.bytes("PrivateKey"),
        }
    }
}

/// Container runtime endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenDockerConfig {
    pub docker_client_uri: String,
}

impl ConfigSection for DenDockerConfig {
    const COLLECTION: &'static str = DEN_DOCKER_COLLECTION;

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert_text("DockerClientUri", &self.docker_client_uri);
        record
    }

    fn from_record(record: &Record) -> Self {
        Self {
            docker_client_uri: record.text("DockerClientUri"),
        }
    }
}

/// The aggregate configuration: all eight sections combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenConfig {
    pub image: DenImageConfig,
    pub mongo: DenMongoConfig,
    pub picky: DenPickyConfig,
    pub lucid: DenLucidConfig,
    pub router: DenRouterConfig,
    pub server: DenServerConfig,
    pub traefik: DenTraefikConfig,
    pub docker: DenDockerConfig,
}
