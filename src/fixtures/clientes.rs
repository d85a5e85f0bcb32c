use crate::domain::Cliente;

fn cliente(id: &str, nome: &str, cpf_cnpj: &str, telefone: &str, email: &str) -> Cliente {
    Cliente {
        id: id.to_string(),
        nome: nome.to_string(),
        cpf_cnpj: cpf_cnpj.to_string(),
        telefone: telefone.to_string(),
        email: email.to_string(),
    }
}

/// Customer records referenced by the demo projects.
pub fn clientes() -> [Cliente; 5] {
    [
        cliente("1", "João Silva", "123.456.789-00", "(11) 98765-4321", "joao.silva@email.com"),
        cliente("2", "Maria Santos", "987.654.321-00", "(11) 91234-5678", "maria.santos@email.com"),
        cliente("3", "Empresa ABC Ltda", "12.345.678/0001-90", "(11) 3333-4444", "contato@empresaabc.com"),
        cliente("4", "Pedro Oliveira", "456.789.123-00", "(11) 95555-6666", "pedro.oliveira@email.com"),
        cliente("5", "Ana Costa", "789.123.456-00", "(11) 97777-8888", "ana.costa@email.com"),
    ]
}
