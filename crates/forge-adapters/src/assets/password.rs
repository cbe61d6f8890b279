//! Credencial administrativa generada.
//!
//! Genera una contraseña aleatoria para el usuario administrador y su digest
//! sha-256 en hexadecimal. El texto plano lo persiste el orquestador de
//! clúster bajo `auth/admin-password`; el digest queda disponible para los
//! consumidores que verifican sin conocer el texto plano.

use sha2::{Digest, Sha256};
use std::any::Any;
use uuid::Uuid;

use forge_core::{Asset, AssetError, Parents};

#[derive(Default)]
pub struct AdminPassword {
    password: String,
    password_hash: String,
}

impl AdminPassword {
    /// Credencial fijada de antemano (tests y wiring manual).
    pub fn with_password(password: &str) -> Self {
        let mut asset = AdminPassword { password: password.to_string(),
                                        password_hash: String::new() };
        asset.password_hash = hash_password(&asset.password);
        asset
    }

    pub fn password(&self) -> &str { &self.password }
    pub fn password_hash(&self) -> &str { &self.password_hash }
}

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl Asset for AdminPassword {
    fn name(&self) -> &'static str { "admin-password" }

    fn generate(&mut self, _parents: &Parents) -> Result<(), AssetError> {
        if self.password.is_empty() {
            self.password = Uuid::new_v4().simple().to_string();
            self.password_hash = hash_password(&self.password);
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any { self }
}
