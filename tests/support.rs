// tests/support.rs
//! Shared test helpers — sample aggregates and tracing init

use den_config_store::{
    DenConfig, DenDockerConfig, DenImageConfig, DenLucidConfig, DenMongoConfig, DenPickyConfig,
    DenRouterConfig, DenServerConfig, DenTraefikConfig,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A fully populated aggregate, including binary key material.
#[allow(dead_code)]
pub fn sample_config() -> DenConfig {
    DenConfig {
        image: DenImageConfig {
            mongo_image: "mongo:4".to_owned(),
            lucid_image: "devolutions/den-lucid:3.6".to_owned(),
            picky_image: "devolutions/picky:4.2".to_owned(),
            router_image: "devolutions/den-router:0.6".to_owned(),
            server_image: "devolutions/den-server:1.2".to_owned(),
            traefik_image: "traefik:1.7".to_owned(),
            jet_image: "devolutions/devolutions-jet:0.4".to_owned(),
        },
        mongo: DenMongoConfig {
            url: "mongodb://den-mongo".to_owned(),
            port: "27017".to_owned(),
        },
        picky: DenPickyConfig {
            realm: "wayk.example.net".to_owned(),
            api_key: "picky-api-key".to_owned(),
            backend: "mongodb".to_owned(),
        },
        lucid: DenLucidConfig {
            api_key: "lucid-api-key".to_owned(),
            admin_secret: "lucid-admin-secret".to_owned(),
            admin_username: "lucid-admin".to_owned(),
        },
        router: DenRouterConfig {
            public_key: Some(vec![0x30, 0x82, 0x01, 0x0a, 0x02, 0x82]),
        },
        server: DenServerConfig {
            api_key: "server-api-key".to_owned(),
            audit_trails: "true".to_owned(),
            external_url: "https://den.example.net".to_owned(),
            ldap_server_type: "ActiveDirectory".to_owned(),
            ldap_base_dn: "DC=example,DC=net".to_owned(),
            ldap_password: "ldap-password".to_owned(),
            ldap_server_url: "ldap://dc.example.net".to_owned(),
            ldap_user_group: "WaykDen Users".to_owned(),
            ldap_username: "ldap-bind".to_owned(),
            private_key: Some(vec![0x30, 0x82, 0x04, 0xa4]),
            jet_server_url: "api.jet-relay.net:8080".to_owned(),
            login_required: "true".to_owned(),
        },
        traefik: DenTraefikConfig {
            api_port: "8080".to_owned(),
            wayk_den_port: "4000".to_owned(),
            certificate: "-----BEGIN CERTIFICATE-----".to_owned(),
            private_key: Some(vec![0x2d, 0x2d, 0x2d]),
        },
        docker: DenDockerConfig {
            docker_client_uri: "unix:///var/run/docker.sock".to_owned(),
        },
    }
}
